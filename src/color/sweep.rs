use serde::{Deserialize, Serialize};

use crate::color::hsl::Hsl;
use crate::foundation::error::{CardError, CardResult};

/// Lightness offset used for the secondary color of each card.
pub const DEFAULT_DARKEN: f64 = 10.0;

/// Primary/secondary gradient stops for one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    /// First gradient stop.
    pub primary: Hsl,
    /// Second gradient stop; the color the card background shows.
    pub secondary: Hsl,
}

impl ColorPair {
    /// Pair two colors in stop order.
    pub fn new(primary: Hsl, secondary: Hsl) -> Self {
        Self { primary, secondary }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(Hsl::WHITE, Hsl::BLACK)
    }
}

/// `count` colors evenly spaced around the hue circle, starting at 0°.
///
/// Every color keeps `base`'s saturation and lightness; `base`'s own hue is ignored.
pub fn hue_sweep(base: Hsl, count: usize) -> CardResult<Vec<Hsl>> {
    if count == 0 {
        return Err(CardError::invalid_argument(
            "hue sweep count must be at least 1",
        ));
    }
    let step = 360.0 / count as f64;
    Ok((0..count).map(|i| base.with_hue(step * i as f64)).collect())
}

/// Lower lightness by `amount` percentage points. The result is not clamped.
pub fn darken(color: Hsl, amount: f64) -> Hsl {
    color.with_lightness(color.l - amount)
}

/// Pair every color with its darkened variant.
pub fn color_pairs(colors: &[Hsl], amount: f64) -> Vec<ColorPair> {
    colors
        .iter()
        .map(|&c| ColorPair::new(c, darken(c, amount)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/color/sweep.rs"]
mod tests;
