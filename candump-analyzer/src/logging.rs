//! CSV session logging of decoded frames.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use canopen_decode::FrameRecord;
use chrono::Local;
use csv::Writer;

pub struct FrameLogger {
    writer: Option<Writer<File>>,
    log_file_path: Option<PathBuf>,
}

impl FrameLogger {
    pub fn disabled() -> Self {
        Self {
            writer: None,
            log_file_path: None,
        }
    }

    /// Create a timestamped log file under `log_directory`.
    pub fn create(log_directory: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        fs::create_dir_all(log_directory)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_directory.join(format!("candump_decoded_{}.csv", timestamp));

        let mut writer = Writer::from_path(&log_path)?;
        writer.write_record(["Timestamp", "Interface", "COB-ID", "Length", "Data", "Decoded"])?;
        writer.flush()?;

        Ok(Self {
            writer: Some(writer),
            log_file_path: Some(log_path),
        })
    }

    /// Append one frame; logging failures are reported but never stop the
    /// decode loop.
    pub fn log_frame(&mut self, frame: &FrameRecord, decoded: &str) {
        if let Some(writer) = self.writer.as_mut() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            let length = frame.declared_length.to_string();
            let data = frame.data.join(" ");
            let record = [
                timestamp.as_str(),
                frame.interface.as_str(),
                frame.can_id.as_str(),
                length.as_str(),
                data.as_str(),
                decoded,
            ];
            if let Err(e) = writer.write_record(record) {
                eprintln!("Failed to write log entry: {}", e);
            }
            let _ = writer.flush();
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.log_file_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logger_ignores_frames() {
        let mut logger = FrameLogger::disabled();
        let frame = FrameRecord {
            interface: "can0".to_string(),
            can_id: "185".to_string(),
            declared_length: 1,
            data: vec!["00".to_string()],
        };
        logger.log_frame(&frame, "node5 TPDO1");
        assert!(logger.file_path().is_none());
    }

    #[test]
    fn created_logger_writes_a_csv_file() {
        let dir = std::env::temp_dir().join("candump-analyzer-test-logs");
        let mut logger = FrameLogger::create(&dir).unwrap();
        let frame = FrameRecord {
            interface: "can0".to_string(),
            can_id: "185".to_string(),
            declared_length: 2,
            data: vec!["12".to_string(), "34".to_string()],
        };
        logger.log_frame(&frame, "node5 TPDO1 | 6041(StatusWord)(12 34)");

        let path = logger.file_path().unwrap().to_path_buf();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Timestamp,Interface,COB-ID"));
        assert!(contents.contains("6041(StatusWord)(12 34)"));

        let _ = fs::remove_file(path);
    }
}
