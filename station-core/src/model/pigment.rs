//! Pigment channels: the four base colors an operator blends.

use serde::{Deserialize, Serialize};

use super::Rgb;

/// Resolution of stored slider amounts.
const AMOUNT_GRID: f64 = 1e9;

/// One of the fixed base pigments, in slider order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pigment {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Pigment {
    /// All pigments in their fixed slider order.
    pub const ALL: [Pigment; 4] = [Pigment::Red, Pigment::Green, Pigment::Blue, Pigment::Yellow];

    /// Lowercase name used in the audit log.
    pub fn name(&self) -> &'static str {
        match self {
            Pigment::Red => "red",
            Pigment::Green => "green",
            Pigment::Blue => "blue",
            Pigment::Yellow => "yellow",
        }
    }

    /// Pure RGB value of this pigment.
    pub fn base_color(&self) -> Rgb {
        match self {
            Pigment::Red => Rgb::new(255, 0, 0),
            Pigment::Green => Rgb::new(0, 255, 0),
            Pigment::Blue => Rgb::new(0, 0, 255),
            Pigment::Yellow => Rgb::new(255, 255, 0),
        }
    }
}

impl std::fmt::Display for Pigment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single slider on the mixing panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PigmentChannel {
    /// Which pigment this slider feeds.
    pub pigment: Pigment,
    /// Base color contributed when enabled.
    pub base_color: Rgb,
    /// Slider amount, always within [0.0, 1.0].
    amount: f64,
    /// Whether the channel contributes to the mix.
    pub enabled: bool,
}

impl PigmentChannel {
    /// Create a disabled channel at zero.
    pub fn new(pigment: Pigment, base_color: Rgb) -> Self {
        Self {
            pigment,
            base_color,
            amount: 0.0,
            enabled: false,
        }
    }

    /// Current slider amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Set the amount, clamped to [0.0, 1.0]. NaN is treated as zero.
    ///
    /// The amount is snapped to a 1e-9 grid so repeated slider steps land
    /// back on exact values (three steps up then down is 0, not 2.8e-17).
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = if amount.is_nan() {
            0.0
        } else {
            ((amount * AMOUNT_GRID).round() / AMOUNT_GRID).clamp(0.0, 1.0)
        };
    }

    /// Raise the amount by `step` and switch the channel on.
    pub fn increase(&mut self, step: f64) {
        self.set_amount(self.amount + step);
        self.enabled = true;
    }

    /// Lower the amount by `step`. The enabled flag is left alone.
    pub fn decrease(&mut self, step: f64) {
        self.set_amount(self.amount - step);
    }

    /// Flip the enabled flag.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Amount that actually feeds the mix.
    pub fn effective_amount(&self) -> f64 {
        if self.enabled {
            self.amount
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> PigmentChannel {
        PigmentChannel::new(Pigment::Red, Pigment::Red.base_color())
    }

    // ==================== Pigment tests ====================

    #[test]
    fn test_pigment_order() {
        let names: Vec<&str> = Pigment::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["red", "green", "blue", "yellow"]);
    }

    #[test]
    fn test_yellow_base_color() {
        assert_eq!(Pigment::Yellow.base_color(), Rgb::new(255, 255, 0));
    }

    // ==================== Channel tests ====================

    #[test]
    fn test_new_channel_is_off() {
        let channel = red();
        assert_eq!(channel.amount(), 0.0);
        assert!(!channel.enabled);
    }

    #[test]
    fn test_increase_enables_and_clamps() {
        let mut channel = red();
        for _ in 0..15 {
            channel.increase(0.1);
        }
        assert!(channel.enabled);
        assert_eq!(channel.amount(), 1.0);
    }

    #[test]
    fn test_decrease_clamps_and_keeps_flag() {
        let mut channel = red();
        channel.increase(0.1);
        channel.decrease(0.1);
        channel.decrease(0.1);
        assert_eq!(channel.amount(), 0.0);
        assert!(channel.enabled);
    }

    #[test]
    fn test_steps_up_and_down_return_to_zero() {
        let mut channel = red();
        for _ in 0..3 {
            channel.increase(0.1);
        }
        assert_eq!(channel.amount(), 0.3);
        for _ in 0..3 {
            channel.decrease(0.1);
        }
        assert_eq!(channel.amount(), 0.0);
        assert_eq!(channel.effective_amount(), 0.0);
    }

    #[test]
    fn test_set_amount_clamps() {
        let mut channel = red();
        channel.set_amount(-3.0);
        assert_eq!(channel.amount(), 0.0);
        channel.set_amount(7.5);
        assert_eq!(channel.amount(), 1.0);
        channel.set_amount(f64::NAN);
        assert_eq!(channel.amount(), 0.0);
    }

    #[test]
    fn test_disabled_channel_has_no_effective_amount() {
        let mut channel = red();
        channel.set_amount(0.6);
        assert_eq!(channel.effective_amount(), 0.0);
        channel.toggle();
        assert_eq!(channel.effective_amount(), 0.6);
    }
}
