//! station-core - Core library for the factory color-mixing station.
//!
//! An operator blends four base pigments with sliders, locks in a blend and
//! the station checks it against a disallowed reference color. While the
//! station is live a product leaves the line every production interval.
//! Production and selection events are written to an append-only audit log.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use station_core::{Command, StationConfig, StationController};
//!
//! let mut station = StationController::new(StationConfig::default());
//! station.begin_run().unwrap();
//! station.apply(Command::IncreaseSelected).unwrap();
//! station.tick(Duration::from_millis(2500)).unwrap();
//! station.apply(Command::ToggleLock).unwrap();
//! println!("QC: {:?}", station.qc_result());
//! ```

pub mod config;
pub mod error;
pub mod inspection;
pub mod journal;
pub mod mixer;
pub mod model;
pub mod station;

// Re-exports for convenience
pub use config::StationConfig;
pub use error::{ErrorCode, Result, StationError};
pub use inspection::{evaluate, Inspection, QcResult};
pub use journal::{EntryKind, EventLogger, LogEntry};
pub use mixer::compute_mix;
pub use model::{ChannelReading, ChannelSnapshot, Pigment, PigmentChannel, ProductEvent, Rgb};
pub use station::{Command, Flow, Mode, StationController, StationView};
