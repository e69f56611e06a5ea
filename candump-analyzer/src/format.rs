//! Terminal rendering of raw and decoded frames.

use canopen_decode::FrameRecord;

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const TERM_WIDTH: usize = 80;

pub struct Formatter {
    color: bool,
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "{}\nPress Ctrl+C to stop\n{}",
            self.paint(YELLOW, "CAN frame analyzer - reading from standard input"),
            "-".repeat(TERM_WIDTH)
        )
    }

    /// One frame block: separator rule, raw fields, interpretation line.
    pub fn frame(&self, frame: &FrameRecord, interpretation: &str) -> String {
        let raw = format!(
            "{} {:<10} {} {:<6} {} {:<4} {} {}",
            self.paint(CYAN, "interface:"),
            frame.interface,
            self.paint(CYAN, "id:"),
            frame.can_id,
            self.paint(CYAN, "len:"),
            frame.declared_length,
            self.paint(CYAN, "data:"),
            frame.data.join(" "),
        );
        format!(
            "{}\n{}\n{} {}",
            "─".repeat(TERM_WIDTH),
            raw,
            self.paint(GREEN, "decoded:"),
            interpretation,
        )
    }

    pub fn unparsed_line(&self, line: &str) -> String {
        format!("{} {}", self.paint(RED, "unparsed line:"), line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameRecord {
        FrameRecord {
            interface: "can0".to_string(),
            can_id: "185".to_string(),
            declared_length: 2,
            data: vec!["12".to_string(), "34".to_string()],
        }
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let rendered = Formatter::new(false).frame(&frame(), "node5 TPDO1");
        assert!(!rendered.contains('\x1b'));
        assert!(rendered.contains("id:"));
        assert!(rendered.contains("node5 TPDO1"));
    }

    #[test]
    fn colored_output_wraps_field_labels() {
        let rendered = Formatter::new(true).frame(&frame(), "node5 TPDO1");
        assert!(rendered.contains(CYAN));
        assert!(rendered.contains(GREEN));
    }

    #[test]
    fn unparsed_lines_echo_the_input() {
        let rendered = Formatter::new(false).unparsed_line("garbage");
        assert!(rendered.ends_with("garbage"));
    }
}
