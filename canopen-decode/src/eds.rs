//! Object dictionary built from a device EDS file.
//!
//! EDS files are INI-style documents whose section names are hexadecimal
//! object indices, optionally suffixed with a sub-index (`[6040]`,
//! `[6041sub1]`). Only `ParameterName` and `DataType` are consumed here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use configparser::ini::Ini;

use crate::error::ConfigError;

/// Name and type declaration of one object dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDictionaryEntry {
    pub parameter_name: String,
    pub data_type_code: String,
}

/// The device's addressable parameter space, keyed by rendered object
/// reference. Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ObjectDictionary {
    entries: HashMap<String, ObjectDictionaryEntry>,
}

impl ObjectDictionary {
    /// Parse an EDS document. Section names are taken verbatim as reference
    /// keys; no validation that they are well-formed hex, a lookup miss at
    /// decode time is tolerated instead. Duplicate sections merge, later
    /// keys winning.
    pub fn from_text(content: &str) -> Result<Self, ConfigError> {
        let mut ini = Ini::new();
        let sections = ini.read(content.to_string()).map_err(ConfigError::Eds)?;

        let mut entries = HashMap::with_capacity(sections.len());
        for (section, keys) in sections {
            entries.insert(
                section,
                ObjectDictionaryEntry {
                    parameter_name: value_or_empty(&keys, "parametername"),
                    data_type_code: value_or_empty(&keys, "datatype"),
                },
            );
        }
        Ok(Self { entries })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Eds(e.to_string()))?;
        Self::from_text(&content)
    }

    /// Look up an entry by rendered reference (e.g. `"6040"`, `"6041sub1"`).
    ///
    /// Case-insensitive: EDS section headers and the uppercase reference
    /// rendering may disagree on hex digit case.
    pub fn get(&self, reference: &str) -> Option<&ObjectDictionaryEntry> {
        self.entries.get(&reference.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn value_or_empty(keys: &HashMap<String, Option<String>>, key: &str) -> String {
    keys.get(key).and_then(Clone::clone).unwrap_or_default()
}
