//! Configuration constants and settings for the mixing station.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Pigment, Rgb};

/// Audit log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "production_log.txt";

/// Slider change per increase/decrease command.
pub const DEFAULT_SLIDER_STEP: f64 = 0.1;

/// Time between products while the line is live, in milliseconds.
pub const DEFAULT_PRODUCTION_INTERVAL_MS: u64 = 2000;

/// Color a blend must stay away from to pass QC (brown).
pub const DEFAULT_REFERENCE_COLOR: Rgb = Rgb::new(150, 75, 0);

/// Minimum distance from the reference color for a passing blend.
pub const DEFAULT_QC_THRESHOLD: f64 = 80.0;

/// Mix shown when nothing is contributing.
pub const NEUTRAL_GRAY: Rgb = Rgb::new(150, 150, 150);

/// Station configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Pigments in slider order with their base colors.
    pub pigments: Vec<(Pigment, Rgb)>,
    /// Slider change per command.
    pub slider_step: f64,
    /// Time between products while live.
    pub production_interval: Duration,
    /// Color the QC check measures distance from.
    pub reference_color: Rgb,
    /// Minimum distance from the reference for a pass.
    pub qc_threshold: f64,
    /// Mix returned when no enabled channel has any amount.
    pub neutral_color: Rgb,
    /// Audit log location.
    pub log_path: PathBuf,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            pigments: Pigment::ALL.iter().map(|p| (*p, p.base_color())).collect(),
            slider_step: DEFAULT_SLIDER_STEP,
            production_interval: Duration::from_millis(DEFAULT_PRODUCTION_INTERVAL_MS),
            reference_color: DEFAULT_REFERENCE_COLOR,
            qc_threshold: DEFAULT_QC_THRESHOLD,
            neutral_color: NEUTRAL_GRAY,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl StationConfig {
    /// Create a configuration writing its audit log to `log_path`.
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StationConfig::default();
        assert_eq!(config.pigments.len(), 4);
        assert_eq!(config.pigments[3], (Pigment::Yellow, Rgb::new(255, 255, 0)));
        assert_eq!(config.production_interval, Duration::from_millis(2000));
        assert_eq!(config.log_path, PathBuf::from("production_log.txt"));
    }

    #[test]
    fn test_new_overrides_log_path_only() {
        let config = StationConfig::new("/tmp/station.log");
        assert_eq!(config.log_path, PathBuf::from("/tmp/station.log"));
        assert_eq!(config.qc_threshold, DEFAULT_QC_THRESHOLD);
        assert_eq!(config.reference_color, Rgb::new(150, 75, 0));
    }
}
