//! Object references and EDS data type widths.

use std::fmt;

/// Identifies one object dictionary entry by index and sub-index.
///
/// Sub-index 0 addresses the whole object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectReference {
    pub index: u16,
    pub sub_index: u8,
}

impl ObjectReference {
    pub fn new(index: u16, sub_index: u8) -> Self {
        Self { index, sub_index }
    }
}

/// The rendered form is the join key between the PDO mapping table and the
/// object dictionary; both sides must go through this one implementation.
impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sub_index == 0 {
            write!(f, "{:X}", self.index)
        } else {
            write!(f, "{:X}sub{}", self.index, self.sub_index)
        }
    }
}

/// Payload byte width of an EDS numeric data type code.
///
/// Unknown or empty codes fall back to one byte; PDO decoding relies on this
/// when a mapped object is missing from the dictionary.
pub fn byte_width(data_type_code: &str) -> usize {
    match data_type_code {
        "0x0001" => 1, // BOOLEAN
        "0x0002" => 1, // INTEGER8
        "0x0003" => 2, // INTEGER16
        "0x0004" => 4, // INTEGER32
        "0x0005" => 1, // UNSIGNED8
        "0x0006" => 2, // UNSIGNED16
        "0x0007" => 4, // UNSIGNED32
        "0x0008" => 4, // REAL32
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_object_renders_without_sub_index() {
        assert_eq!(ObjectReference::new(0x6040, 0).to_string(), "6040");
    }

    #[test]
    fn sub_index_renders_with_suffix() {
        assert_eq!(ObjectReference::new(0x6041, 1).to_string(), "6041sub1");
        assert_eq!(ObjectReference::new(0x607A, 12).to_string(), "607Asub12");
    }

    #[test]
    fn hex_rendering_has_no_leading_zeros() {
        assert_eq!(ObjectReference::new(0x100, 0).to_string(), "100");
    }

    #[test]
    fn known_type_codes_have_declared_widths() {
        assert_eq!(byte_width("0x0003"), 2);
        assert_eq!(byte_width("0x0004"), 4);
        assert_eq!(byte_width("0x0005"), 1);
        assert_eq!(byte_width("0x0008"), 4);
    }

    #[test]
    fn unknown_type_code_defaults_to_one_byte() {
        assert_eq!(byte_width(""), 1);
        assert_eq!(byte_width("0x0009"), 1);
        assert_eq!(byte_width("garbage"), 1);
    }
}
