//! Configuration load errors.

use std::error::Error;
use std::fmt;

/// Fatal configuration failures raised while loading the EDS or bus
/// configuration documents. Per-frame conditions (missing mappings, unknown
/// references, truncated payloads) are not errors and never reach this type.
#[derive(Debug)]
pub enum ConfigError {
    /// The EDS document could not be read or parsed.
    Eds(String),
    /// The bus configuration document could not be read or parsed.
    Bus(String),
    /// The bus configuration has no section for the requested node context.
    NodeContext(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eds(msg) => write!(f, "EDS parse error: {}", msg),
            Self::Bus(msg) => write!(f, "bus configuration error: {}", msg),
            Self::NodeContext(node) => {
                write!(f, "bus configuration has no node context '{}'", node)
            }
        }
    }
}

impl Error for ConfigError {}
