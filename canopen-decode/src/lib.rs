//! # CANopen Decode Library
//!
//! Interprets captured CAN frames as CANopen protocol events using a device
//! EDS file (object dictionary) and a bus configuration (PDO mappings).
//!
//! This library provides:
//! - Object dictionary and PDO mapping table construction from configuration
//! - COB-ID classification into CANopen service categories
//! - PDO payload decoding into named, typed object dictionary fields
//! - Static lookup tables for NMT commands, SDO command specifiers and
//!   emergency error codes

pub mod bus;
pub mod classify;
pub mod decode;
pub mod eds;
pub mod error;
pub mod lookup;
pub mod nmt;
pub mod types;

// Re-export commonly used types for convenience
pub use bus::PdoMappingTable;
pub use classify::{classify, FrameCategory};
pub use decode::{
    DecodeEngine, DecodedMessage, FrameRecord, MessageDetail, PdoField,
    MAPPING_MISSING_DIAGNOSTIC,
};
pub use eds::{ObjectDictionary, ObjectDictionaryEntry};
pub use error::ConfigError;
pub use lookup::{emergency_label, sdo_command_label};
pub use nmt::decode_nmt;
pub use types::{byte_width, ObjectReference};
