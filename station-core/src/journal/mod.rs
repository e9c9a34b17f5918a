//! Append-only audit log of production and selection events.

mod entry;
mod logger;

pub use entry::{format_timestamp, EntryKind, LogEntry, TIMESTAMP_FORMAT};
pub use logger::EventLogger;
