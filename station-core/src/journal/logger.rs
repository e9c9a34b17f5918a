//! File-backed audit logger.
//!
//! Every call opens the log, writes one entry and closes it again when the
//! handle drops. Nothing is buffered across calls, so an entry is either on
//! disk when the call returns `Ok` or the caller gets a
//! [`StationError::StorageUnavailable`].

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Result, StationError};
use crate::inspection::QcResult;
use crate::model::{ChannelSnapshot, Rgb};

use super::entry::LogEntry;

/// Append-only audit log writer.
#[derive(Debug, Clone)]
pub struct EventLogger {
    path: PathBuf,
}

impl EventLogger {
    /// Create a logger for the file at `path`. The file is not touched until
    /// the first entry is written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a product leaving the line.
    pub fn log_production(&self, color: Rgb, channels: &ChannelSnapshot) -> Result<LogEntry> {
        let entry = LogEntry::Production {
            at: Local::now(),
            color,
            channels: channels.clone(),
        };
        self.append(&entry)?;
        Ok(entry)
    }

    /// Record a locked blend and its QC verdict.
    pub fn log_selection(
        &self,
        color: Rgb,
        qc: QcResult,
        channels: &ChannelSnapshot,
    ) -> Result<LogEntry> {
        let entry = LogEntry::Selection {
            at: Local::now(),
            color,
            qc,
            channels: channels.clone(),
        };
        self.append(&entry)?;
        Ok(entry)
    }

    /// Mark the start of a new run.
    pub fn mark_run_start(&self) -> Result<LogEntry> {
        let entry = LogEntry::RunMarker { at: Local::now() };
        self.append(&entry)?;
        Ok(entry)
    }

    /// Replace the whole log with a single clear marker.
    pub fn clear(&self) -> Result<LogEntry> {
        let entry = LogEntry::ClearMarker { at: Local::now() };
        let file = File::create(&self.path).map_err(|e| StationError::storage(&self.path, e))?;
        self.write_line(file, &entry)?;
        tracing::info!("Cleared audit log {}", self.path.display());
        Ok(entry)
    }

    /// Append one entry to the end of the log.
    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StationError::storage(&self.path, e))?;
        self.write_line(file, entry)
    }

    fn write_line(&self, mut file: File, entry: &LogEntry) -> Result<()> {
        writeln!(file, "{}", entry.to_line()).map_err(|e| StationError::storage(&self.path, e))?;
        file.sync_data()
            .map_err(|e| StationError::storage(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::journal::EntryKind;
    use crate::model::{Pigment, PigmentChannel};

    fn snapshot() -> ChannelSnapshot {
        let channels: Vec<PigmentChannel> = Pigment::ALL
            .iter()
            .map(|p| PigmentChannel::new(*p, p.base_color()))
            .collect();
        ChannelSnapshot::capture(&channels)
    }

    fn read(logger: &EventLogger) -> String {
        std::fs::read_to_string(logger.path()).expect("log readable")
    }

    #[test]
    fn test_file_created_on_first_append() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = EventLogger::new(dir.path().join("log.txt"));
        assert!(!logger.path().exists());

        logger
            .log_production(Rgb::new(150, 150, 150), &snapshot())
            .expect("append");
        assert!(logger.path().exists());
    }

    #[test]
    fn test_entries_appended_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = EventLogger::new(dir.path().join("log.txt"));

        logger.mark_run_start().expect("run marker");
        logger
            .log_production(Rgb::new(255, 0, 0), &snapshot())
            .expect("production");
        let entry = logger
            .log_selection(Rgb::new(255, 0, 0), QcResult::Pass, &snapshot())
            .expect("selection");
        assert_eq!(entry.kind(), EntryKind::Selection);

        let content = read(&logger);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("=== NEW RUN at "));
        assert!(lines[2].starts_with("PRODUCTION\t"));
        assert!(lines[3].starts_with("SELECTION\t"));
        assert!(lines[3].contains("\tQC=PASS\t"));
    }

    #[test]
    fn test_clear_leaves_single_marker() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = EventLogger::new(dir.path().join("log.txt"));
        for _ in 0..25 {
            logger
                .log_production(Rgb::new(0, 0, 255), &snapshot())
                .expect("production");
        }

        logger.clear().expect("clear");

        let content = read(&logger);
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("LOG CLEARED at "));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_unopenable_path_is_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = EventLogger::new(dir.path().join("no-such-dir").join("log.txt"));

        let err = logger
            .log_production(Rgb::new(0, 0, 0), &snapshot())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);

        let err = logger.clear().unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
    }
}
