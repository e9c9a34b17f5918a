//! Quality inspection of locked blends.

mod quality;

pub use quality::{evaluate, Inspection, QcResult};
