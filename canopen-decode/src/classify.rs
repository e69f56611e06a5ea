//! COB-ID classification into CANopen service categories.

use std::fmt;

/// Closed set of CANopen service categories a COB-ID can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCategory {
    /// Network management command (COB-ID 000).
    Nmt,
    /// Synchronization message (COB-ID 080).
    Sync,
    /// Emergency message (function code 0x080 + node).
    Emergency,
    /// Transmit PDO 1..4.
    Tpdo(u8),
    /// Receive PDO 1..4.
    Rpdo(u8),
    /// SDO server-to-client range (0x580 + node).
    SdoResponse,
    /// SDO client-to-server range (0x600 + node).
    SdoRequest,
    /// Function bits match no known category; dropped from reporting.
    Unclassified,
}

impl fmt::Display for FrameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nmt => write!(f, "NMT"),
            Self::Sync => write!(f, "SYNC"),
            Self::Emergency => write!(f, "EMCY"),
            Self::Tpdo(n) => write!(f, "TPDO{}", n),
            Self::Rpdo(n) => write!(f, "RPDO{}", n),
            Self::SdoResponse => write!(f, "RSDO"),
            Self::SdoRequest => write!(f, "TSDO"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// Classify a COB-ID given as hex text without `0x` prefix.
///
/// `000` and `080` are matched literally before the numeric split into
/// function bits (`cob & 0x780`) and node bits (`cob & 0x7F`). Unparseable
/// input classifies as [`FrameCategory::Unclassified`] rather than failing.
pub fn classify(cob_id_hex: &str) -> (FrameCategory, Option<u8>) {
    match cob_id_hex {
        "000" => return (FrameCategory::Nmt, None),
        "080" => return (FrameCategory::Sync, None),
        _ => {}
    }

    let cob_id = match u16::from_str_radix(cob_id_hex, 16) {
        Ok(value) => value,
        Err(_) => return (FrameCategory::Unclassified, None),
    };

    let node_id = (cob_id & 0x7F) as u8;
    let category = match cob_id & 0x780 {
        0x080 => FrameCategory::Emergency,
        0x180 => FrameCategory::Tpdo(1),
        0x280 => FrameCategory::Tpdo(2),
        0x380 => FrameCategory::Tpdo(3),
        0x480 => FrameCategory::Tpdo(4),
        0x200 => FrameCategory::Rpdo(1),
        0x300 => FrameCategory::Rpdo(2),
        0x400 => FrameCategory::Rpdo(3),
        0x500 => FrameCategory::Rpdo(4),
        0x580 => FrameCategory::SdoResponse,
        0x600 => FrameCategory::SdoRequest,
        _ => return (FrameCategory::Unclassified, None),
    };
    (category, Some(node_id))
}
