//! Production records: products spawned by the line and the channel
//! readings captured alongside them.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{Pigment, PigmentChannel, Rgb};

/// One channel's state at the moment a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelReading {
    pub pigment: Pigment,
    pub amount: f64,
    pub enabled: bool,
}

impl std::fmt::Display for ChannelReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={:.2} ({})",
            self.pigment,
            self.amount,
            if self.enabled { "ON" } else { "OFF" }
        )
    }
}

/// Frozen copy of every channel, in slider order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    pub readings: Vec<ChannelReading>,
}

impl ChannelSnapshot {
    /// Capture the current state of the given channels.
    pub fn capture(channels: &[PigmentChannel]) -> Self {
        Self {
            readings: channels
                .iter()
                .map(|c| ChannelReading {
                    pigment: c.pigment,
                    amount: c.amount(),
                    enabled: c.enabled,
                })
                .collect(),
        }
    }

    /// Find the reading for a pigment.
    pub fn reading(&self, pigment: Pigment) -> Option<&ChannelReading> {
        self.readings.iter().find(|r| r.pigment == pigment)
    }
}

/// A unit spawned by the production line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEvent {
    /// Running count of products made this run, starting at 1.
    pub sequence: u64,
    /// Mix color the product was made with.
    pub color: Rgb,
    /// Wall-clock production time.
    pub produced_at: DateTime<Local>,
    /// Channel state when the product was made.
    pub channels: ChannelSnapshot,
}
