//! candump capture line tokenization.

use canopen_decode::FrameRecord;
use regex::Regex;

/// Matches candump output such as `can0  185  [2]  12 34`.
const LINE_PATTERN: &str = r"^(\S+)\s+(\S+)\s+\[(\d+)\]\s*(.*)$";

pub struct LineParser {
    pattern: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(LINE_PATTERN)?,
        })
    }

    /// Tokenize one capture line; `None` for lines that are not candump
    /// frame records.
    pub fn parse(&self, line: &str) -> Option<FrameRecord> {
        let captures = self.pattern.captures(line)?;
        let declared_length = captures[3].parse().ok()?;
        Some(FrameRecord {
            interface: captures[1].to_string(),
            can_id: captures[2].to_string(),
            declared_length,
            data: captures[4].split_whitespace().map(str::to_string).collect(),
        })
    }
}
