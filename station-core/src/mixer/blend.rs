//! Weighted-average blending of enabled pigment channels.

use crate::model::{PigmentChannel, Rgb};

/// Blend the enabled channels into one color.
///
/// Each enabled channel contributes its base color weighted by
/// `amount / total`, where `total` is the sum of enabled amounts.
/// Components are truncated toward zero. When `total` is zero the
/// `neutral` color is returned unchanged.
pub fn compute_mix(channels: &[PigmentChannel], neutral: Rgb) -> Rgb {
    let total: f64 = channels.iter().map(|c| c.effective_amount()).sum();

    if total <= 0.0 {
        return neutral;
    }

    let mut sums = [0.0f64; 3];
    for channel in channels.iter().filter(|c| c.enabled) {
        let weight = channel.amount() / total;
        for (sum, component) in sums.iter_mut().zip(channel.base_color.components()) {
            *sum += component * weight;
        }
    }

    // `as u8` saturates, so float noise above 255 cannot wrap.
    Rgb::new(sums[0] as u8, sums[1] as u8, sums[2] as u8)
}
