//! Raster encoders for the five card output formats.

/// Format table and `image`-backed encoders.
pub mod formats;
