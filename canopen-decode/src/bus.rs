//! PDO mapping table built from a bus configuration YAML document.
//!
//! The document maps node contexts to per-node settings; under a node
//! context the `tpdo` and `rpdo` families map integer indices 1..4 to a
//! mapping list of object references.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::ConfigError;
use crate::types::ObjectReference;

#[derive(Debug, Deserialize)]
struct MappingEntry {
    index: u16,
    #[serde(default)]
    sub_index: u8,
}

#[derive(Debug, Deserialize)]
struct PdoEntry {
    #[serde(default)]
    enabled: Option<Value>,
    #[serde(default)]
    mapping: Option<Vec<MappingEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct NodeContext {
    #[serde(default)]
    tpdo: HashMap<u8, PdoEntry>,
    #[serde(default)]
    rpdo: HashMap<u8, PdoEntry>,
}

/// Ordered object references per PDO, keyed `"TPDO1".."TPDO4"` /
/// `"RPDO1".."RPDO4"`. Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PdoMappingTable {
    mappings: HashMap<String, Vec<ObjectReference>>,
}

impl PdoMappingTable {
    /// Build the table from YAML text for one node context.
    pub fn from_text(content: &str, node_context: &str) -> Result<Self, ConfigError> {
        let document: Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Bus(e.to_string()))?;
        let node_value = document
            .get(node_context)
            .ok_or_else(|| ConfigError::NodeContext(node_context.to_string()))?;
        let node: NodeContext = serde_yaml::from_value(node_value.clone())
            .map_err(|e| ConfigError::Bus(e.to_string()))?;

        let mut mappings = HashMap::new();
        collect_family(&mut mappings, "TPDO", &node.tpdo);
        collect_family(&mut mappings, "RPDO", &node.rpdo);
        Ok(Self { mappings })
    }

    pub fn from_file(path: impl AsRef<Path>, node_context: &str) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Bus(e.to_string()))?;
        Self::from_text(&content, node_context)
    }

    /// Ordered references for one PDO key, `None` when the bus configuration
    /// does not map it.
    pub fn get(&self, pdo_key: &str) -> Option<&[ObjectReference]> {
        self.mappings.get(pdo_key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Indices are scanned in order 1..4 and the scan stops at the first index
/// that is absent, has no mapping list, or is disabled. A disabled PDO2
/// hides PDO3/4 even when they are configured.
fn collect_family(
    out: &mut HashMap<String, Vec<ObjectReference>>,
    family: &str,
    entries: &HashMap<u8, PdoEntry>,
) {
    for n in 1..=4u8 {
        let entry = match entries.get(&n) {
            Some(entry) => entry,
            None => break,
        };
        let mapping = match &entry.mapping {
            Some(mapping) => mapping,
            None => break,
        };
        // Only the literal string "false" disables a PDO; a YAML boolean
        // false does not match it.
        if entry.enabled.as_ref().and_then(Value::as_str) == Some("false") {
            break;
        }
        let references = mapping
            .iter()
            .map(|m| ObjectReference::new(m.index, m.sub_index))
            .collect();
        out.insert(format!("{}{}", family, n), references);
    }
}
