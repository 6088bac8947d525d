//! huecards generates a deterministic set of placeholder card images.
//!
//! # Pipeline overview
//!
//! 1. **Colors**: a base HSL color is swept around the hue circle ([`hue_sweep`]) and every color
//!    is paired with a darker variant ([`color_pairs`]).
//! 2. **Scene**: each [`ColorPair`] becomes a fixed 128×224 vector layout ([`build_card`]).
//! 3. **Raster**: the scene is serialized to SVG, parsed with `usvg` and rendered with `resvg`.
//! 4. **Export**: the raster is encoded as WebP, JPEG, PNG, AVIF and TIFF ([`export_card`]).
//!
//! [`generate_cards`] runs the whole pipeline for a [`CardConfig`] and only returns once every
//! file has been written or has failed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod color;
mod config;
mod export;
mod foundation;
mod pipeline;
mod render;
mod scene;

/// Output formats and encoders.
pub mod encode;

pub use color::hsl::Hsl;
pub use color::sweep::{ColorPair, DEFAULT_DARKEN, color_pairs, darken, hue_sweep};
pub use config::{
    CardConfig, DEFAULT_BASE_COLOR, DEFAULT_CARD_COUNT, DEFAULT_OUT_DIR, ExportConfig,
};
pub use encode::formats::{EncodeConfig, OutputFormat, encode_image};
pub use export::card::{CardArtifact, ExportReport, artifact_path, export_card};
pub use foundation::core::{CARD_CANVAS, Canvas, Point, Rect, Rgba8};
pub use foundation::error::{CardError, CardResult};
pub use pipeline::{OutputDirStatus, RunSummary, ensure_output_dir, generate_cards};
pub use render::raster::{RasterImage, parse_svg, rasterize, rasterize_svg};
pub use scene::model::{
    CARD_GRADIENT_ID, GradientStop, LinearGradient, Paint, RectShape, Scene, Stroke, build_card,
};
