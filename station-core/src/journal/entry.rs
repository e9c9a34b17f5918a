//! Audit log entries and their tab-separated line format.

use std::fmt::Write;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::inspection::QcResult;
use crate::model::{ChannelSnapshot, Rgb};

/// ctime-style timestamp, e.g. `Mon Oct 19 14:03:07 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Format a wall-clock time the way the audit log writes it.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Kind of audit log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    Production,
    Selection,
    RunMarker,
    ClearMarker,
}

/// A single immutable audit log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogEntry {
    Production {
        at: DateTime<Local>,
        color: Rgb,
        channels: ChannelSnapshot,
    },
    Selection {
        at: DateTime<Local>,
        color: Rgb,
        qc: QcResult,
        channels: ChannelSnapshot,
    },
    RunMarker {
        at: DateTime<Local>,
    },
    ClearMarker {
        at: DateTime<Local>,
    },
}

impl LogEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            LogEntry::Production { .. } => EntryKind::Production,
            LogEntry::Selection { .. } => EntryKind::Selection,
            LogEntry::RunMarker { .. } => EntryKind::RunMarker,
            LogEntry::ClearMarker { .. } => EntryKind::ClearMarker,
        }
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        match self {
            LogEntry::Production { at, .. }
            | LogEntry::Selection { at, .. }
            | LogEntry::RunMarker { at }
            | LogEntry::ClearMarker { at } => at,
        }
    }

    /// Render the entry as written to the log, without the trailing newline.
    ///
    /// Run markers carry a leading blank line so each run stands apart from
    /// earlier history in the same file.
    pub fn to_line(&self) -> String {
        let ts = format_timestamp(self.timestamp());
        match self {
            LogEntry::Production {
                color, channels, ..
            } => {
                let mut line = format!("PRODUCTION\t{}\tRGB={}", ts, color);
                push_channels(&mut line, channels);
                line
            }
            LogEntry::Selection {
                color,
                qc,
                channels,
                ..
            } => {
                let mut line = format!("SELECTION\t{}\tRGB={}\tQC={}", ts, color, qc);
                push_channels(&mut line, channels);
                line
            }
            LogEntry::RunMarker { .. } => format!("\n=== NEW RUN at {} ===", ts),
            LogEntry::ClearMarker { .. } => format!("LOG CLEARED at {}", ts),
        }
    }
}

fn push_channels(line: &mut String, channels: &ChannelSnapshot) {
    for reading in &channels.readings {
        // Writing into a String cannot fail.
        let _ = write!(line, "\t{}", reading);
    }
}
