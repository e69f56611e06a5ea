//! Frame decoding engine.
//!
//! Joins the classification result with the object dictionary and the PDO
//! mapping table to turn one tokenized capture line into a structured
//! message. Every decode call is a pure function of the frame and the
//! immutable configuration loaded at startup.

use std::fmt;

use crate::bus::PdoMappingTable;
use crate::classify::{classify, FrameCategory};
use crate::eds::ObjectDictionary;
use crate::nmt::decode_nmt;
use crate::types::byte_width;

/// Diagnostic emitted when a PDO frame arrives for a PDO the bus
/// configuration does not map. Expected for partially configured devices.
pub const MAPPING_MISSING_DIAGNOSTIC: &str =
    "bus configuration does not define a mapping for this PDO";

/// One tokenized capture line, as produced by the candump line parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    pub interface: String,
    /// COB-ID as hex text without `0x` prefix.
    pub can_id: String,
    pub declared_length: usize,
    /// Payload as 2-hex-digit byte tokens.
    pub data: Vec<String>,
}

/// One decoded object slice of a PDO payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdoField {
    /// Rendered object reference, e.g. `"6041"` or `"607Asub1"`.
    pub reference: String,
    /// `ParameterName` from the dictionary, `"Unknown"` when the reference
    /// has no entry.
    pub parameter_name: String,
    /// Byte tokens consumed for this object; shorter than the declared
    /// width when the payload ran out.
    pub bytes: Vec<String>,
}

impl fmt::Display for PdoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})({})",
            self.reference,
            self.parameter_name,
            self.bytes.join(" ")
        )
    }
}

/// Category-specific payload of a decoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageDetail {
    /// Fixed-form text (NMT and SYNC frames).
    Text(String),
    /// Decoded PDO payload, in mapping order.
    Fields(Vec<PdoField>),
    /// The PDO has no entry in the bus configuration.
    MappingMissing,
    /// Classified but not decoded further (EMCY and SDO frames).
    LabelOnly,
}

/// Structured result of decoding one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub category: FrameCategory,
    pub node_id: Option<u8>,
    pub detail: MessageDetail,
}

impl fmt::Display for DecodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node_id.unwrap_or(0);
        match &self.detail {
            MessageDetail::Text(text) => write!(f, "{}", text),
            MessageDetail::LabelOnly => write!(f, "node{} {}", node, self.category),
            MessageDetail::Fields(fields) => {
                let rendered: Vec<String> = fields.iter().map(ToString::to_string).collect();
                write!(f, "node{} {} | {}", node, self.category, rendered.join(" "))
            }
            MessageDetail::MappingMissing => {
                write!(f, "node{} {} | {}", node, self.category, MAPPING_MISSING_DIAGNOSTIC)
            }
        }
    }
}

/// Decoder over one immutable configuration snapshot.
pub struct DecodeEngine {
    dictionary: ObjectDictionary,
    mappings: PdoMappingTable,
}

impl DecodeEngine {
    pub fn new(dictionary: ObjectDictionary, mappings: PdoMappingTable) -> Self {
        Self {
            dictionary,
            mappings,
        }
    }

    /// Decode one frame. `None` means the frame is skipped from reporting:
    /// the COB-ID matched no known function code, or an NMT frame was too
    /// short to carry its command and target bytes.
    pub fn decode(&self, frame: &FrameRecord) -> Option<DecodedMessage> {
        let (category, node_id) = classify(&frame.can_id);
        let detail = match category {
            FrameCategory::Nmt => {
                let command = frame.data.first()?;
                let target = frame.data.get(1)?;
                MessageDetail::Text(decode_nmt(command, target))
            }
            FrameCategory::Sync => MessageDetail::Text("sync".to_string()),
            FrameCategory::Tpdo(_) | FrameCategory::Rpdo(_) => {
                self.decode_pdo(&category.to_string(), &frame.data)
            }
            // EMCY and SDO payloads are intentionally not decoded further
            FrameCategory::Emergency
            | FrameCategory::SdoResponse
            | FrameCategory::SdoRequest => MessageDetail::LabelOnly,
            FrameCategory::Unclassified => return None,
        };
        Some(DecodedMessage {
            category,
            node_id,
            detail,
        })
    }

    /// Walk the ordered references of one PDO, slicing the payload by each
    /// object's declared byte width. The cursor never resets within a
    /// frame; a truncated payload shortens the affected slices instead of
    /// erroring.
    fn decode_pdo(&self, pdo_key: &str, payload: &[String]) -> MessageDetail {
        let references = match self.mappings.get(pdo_key) {
            Some(references) => references,
            None => return MessageDetail::MappingMissing,
        };

        let mut cursor = 0usize;
        let mut fields = Vec::with_capacity(references.len());
        for reference in references {
            let rendered = reference.to_string();
            let (parameter_name, width) = match self.dictionary.get(&rendered) {
                Some(entry) => (entry.parameter_name.clone(), byte_width(&entry.data_type_code)),
                None => ("Unknown".to_string(), 1),
            };
            let end = (cursor + width).min(payload.len());
            let bytes = payload[cursor..end].to_vec();
            cursor = end;
            fields.push(PdoField {
                reference: rendered,
                parameter_name,
                bytes,
            });
        }
        MessageDetail::Fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eds::ObjectDictionary;

    fn engine() -> DecodeEngine {
        let eds = "\
[6041]
ParameterName=StatusWord
DataType=0x0003

[6061]
ParameterName=ModeDisplay
DataType=0x0002

[607A]
ParameterName=TargetPosition
DataType=0x0004
";
        let bus = "\
joint_1:
  tpdo:
    1:
      mapping:
        - index: 0x6041
          sub_index: 0
    2:
      mapping:
        - index: 0x6041
          sub_index: 0
        - index: 0x6061
          sub_index: 0
  rpdo:
    1:
      mapping:
        - index: 0x607A
          sub_index: 0
        - index: 0x9999
          sub_index: 0
";
        let dictionary = ObjectDictionary::from_text(eds).unwrap();
        let mappings = PdoMappingTable::from_text(bus, "joint_1").unwrap();
        DecodeEngine::new(dictionary, mappings)
    }

    fn frame(can_id: &str, data: &[&str]) -> FrameRecord {
        FrameRecord {
            interface: "can0".to_string(),
            can_id: can_id.to_string(),
            declared_length: data.len(),
            data: data.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn tpdo1_decodes_to_named_field() {
        let message = engine().decode(&frame("185", &["12", "34"])).unwrap();
        assert_eq!(message.category, FrameCategory::Tpdo(1));
        assert_eq!(message.node_id, Some(5));
        assert!(message.to_string().contains("6041(StatusWord)(12 34)"));
    }

    #[test]
    fn full_rendering_includes_node_and_category() {
        let message = engine().decode(&frame("185", &["12", "34"])).unwrap();
        assert_eq!(message.to_string(), "node5 TPDO1 | 6041(StatusWord)(12 34)");
    }

    #[test]
    fn multiple_objects_advance_the_cursor() {
        let message = engine().decode(&frame("285", &["12", "34", "07"])).unwrap();
        assert_eq!(
            message.to_string(),
            "node5 TPDO2 | 6041(StatusWord)(12 34) 6061(ModeDisplay)(07)"
        );
    }

    #[test]
    fn truncated_payload_shortens_the_last_field() {
        // Two 2-byte objects against a 3-byte payload
        let eds = "\
[6041]
ParameterName=A
DataType=0x0003

[6042]
ParameterName=B
DataType=0x0003
";
        let bus = "\
n:
  tpdo:
    1:
      mapping:
        - index: 0x6041
        - index: 0x6042
";
        let engine = DecodeEngine::new(
            ObjectDictionary::from_text(eds).unwrap(),
            PdoMappingTable::from_text(bus, "n").unwrap(),
        );
        let message = engine.decode(&frame("181", &["11", "22", "33"])).unwrap();
        assert_eq!(message.to_string(), "node1 TPDO1 | 6041(A)(11 22) 6042(B)(33)");
    }

    #[test]
    fn unknown_reference_defaults_to_one_byte_and_sentinel_name() {
        let message = engine().decode(&frame("205", &["01", "02", "03", "04", "FF"])).unwrap();
        assert_eq!(
            message.to_string(),
            "node5 RPDO1 | 607A(TargetPosition)(01 02 03 04) 9999(Unknown)(FF)"
        );
    }

    #[test]
    fn unmapped_pdo_yields_diagnostic_not_error() {
        let message = engine().decode(&frame("385", &["00"])).unwrap();
        assert_eq!(message.detail, MessageDetail::MappingMissing);
        assert_eq!(
            message.to_string(),
            format!("node5 TPDO3 | {}", MAPPING_MISSING_DIAGNOSTIC)
        );
    }

    #[test]
    fn nmt_frame_decodes_command_and_target() {
        let message = engine().decode(&frame("000", &["80", "00"])).unwrap();
        assert_eq!(message.category, FrameCategory::Nmt);
        assert_eq!(message.to_string(), "nmt broadcast 切换到预操作状态");
    }

    #[test]
    fn sync_frame_has_fixed_text() {
        let message = engine().decode(&frame("080", &[])).unwrap();
        assert_eq!(message.to_string(), "sync");
    }

    #[test]
    fn emergency_and_sdo_frames_are_label_only() {
        let engine = engine();
        let emcy = engine.decode(&frame("081", &["11", "21", "00"])).unwrap();
        assert_eq!(emcy.to_string(), "node1 EMCY");

        let sdo = engine.decode(&frame("585", &["4F", "41", "60", "00"])).unwrap();
        assert_eq!(sdo.to_string(), "node5 RSDO");
    }

    #[test]
    fn unclassified_frames_are_skipped() {
        assert!(engine().decode(&frame("7FF", &["00"])).is_none());
    }

    #[test]
    fn short_nmt_frame_is_skipped() {
        assert!(engine().decode(&frame("000", &["80"])).is_none());
    }

    #[test]
    fn empty_payload_yields_empty_field_values() {
        let message = engine().decode(&frame("185", &[])).unwrap();
        assert_eq!(message.to_string(), "node5 TPDO1 | 6041(StatusWord)()");
    }

    #[test]
    fn mapping_references_join_with_dictionary_keys() {
        // Round trip: every reference the mapping table produced must be
        // resolvable against a dictionary built from matching sections.
        let engine = engine();
        for key in ["TPDO1", "TPDO2", "RPDO1"] {
            let message = engine
                .decode(&frame(pdo_cob_id(key), &["00", "00", "00", "00", "00", "00"]))
                .unwrap();
            assert!(matches!(message.detail, MessageDetail::Fields(_)));
        }
    }

    fn pdo_cob_id(key: &str) -> &'static str {
        match key {
            "TPDO1" => "181",
            "TPDO2" => "281",
            "RPDO1" => "201",
            _ => unreachable!(),
        }
    }
}
