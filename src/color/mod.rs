//! HSL colors and the hue sweep that drives card palettes.

pub(crate) mod hsl;
pub(crate) mod sweep;
