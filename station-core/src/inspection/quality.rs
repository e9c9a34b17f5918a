//! Distance-based pass/fail check against a disallowed reference color.

use serde::{Deserialize, Serialize};

use crate::model::Rgb;

/// Outcome of a quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QcResult {
    Pass,
    Fail,
}

impl std::fmt::Display for QcResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QcResult::Pass => write!(f, "PASS"),
            QcResult::Fail => write!(f, "FAIL"),
        }
    }
}

/// A quality check with the measured distance kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub result: QcResult,
    pub distance: f64,
}

impl Inspection {
    /// Inspect `color` against `reference`.
    pub fn run(color: Rgb, reference: Rgb, threshold: f64) -> Self {
        let distance = color.distance(&reference);
        let result = if distance >= threshold {
            QcResult::Pass
        } else {
            QcResult::Fail
        };
        Self { result, distance }
    }
}

/// Pass when `color` is at least `threshold` away from `reference`.
pub fn evaluate(color: Rgb, reference: Rgb, threshold: f64) -> QcResult {
    Inspection::run(color, reference, threshold).result
}
