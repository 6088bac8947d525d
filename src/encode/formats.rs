use std::io::Cursor;

use image::ImageEncoder as _;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::tiff::TiffEncoder;
use image::codecs::webp::WebPEncoder;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{CardError, CardResult};
use crate::render::raster::RasterImage;

/// Output encodings produced for every card, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless WebP.
    Webp,
    /// Baseline JPEG (alpha flattened).
    Jpeg,
    /// PNG.
    Png,
    /// AVIF (AV1 still image).
    Avif,
    /// Uncompressed TIFF.
    Tiff,
}

impl OutputFormat {
    /// Every format, in the order files are listed for a card.
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Webp,
        OutputFormat::Jpeg,
        OutputFormat::Png,
        OutputFormat::Avif,
        OutputFormat::Tiff,
    ];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Avif => "avif",
            OutputFormat::Tiff => "tiff",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encoder knobs shared by the quality-aware formats.
///
/// WebP and TIFF always use encoder defaults (lossless WebP, uncompressed TIFF).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// 1..=100. JPEG and AVIF color quality.
    pub quality: u8,
    /// 1..=100. Requested AVIF alpha quality; the `image` AVIF encoder encodes alpha at
    /// `quality`, so this is only validated and recorded.
    pub alpha_quality: u8,
    /// Favor size-optimal lossless compression for PNG.
    pub near_lossless: bool,
    /// 1..=10, AVIF encoder speed (10 is fastest).
    pub avif_speed: u8,
    /// Background used when a format cannot carry alpha.
    pub flatten_rgb: [u8; 3],
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            quality: 100,
            alpha_quality: 100,
            near_lossless: true,
            avif_speed: 6,
            flatten_rgb: [0, 0, 0],
        }
    }
}

impl EncodeConfig {
    /// Check every knob is inside the range its encoder accepts.
    pub fn validate(&self) -> CardResult<()> {
        if !(1..=100).contains(&self.quality) {
            return Err(CardError::invalid_argument(format!(
                "encode quality must be in 1..=100, got {}",
                self.quality
            )));
        }
        if !(1..=100).contains(&self.alpha_quality) {
            return Err(CardError::invalid_argument(format!(
                "encode alpha_quality must be in 1..=100, got {}",
                self.alpha_quality
            )));
        }
        if !(1..=10).contains(&self.avif_speed) {
            return Err(CardError::invalid_argument(format!(
                "avif speed must be in 1..=10, got {}",
                self.avif_speed
            )));
        }
        Ok(())
    }
}

/// Encode `img` into an in-memory file of the given format.
pub fn encode_image(
    img: &RasterImage,
    format: OutputFormat,
    cfg: &EncodeConfig,
) -> CardResult<Vec<u8>> {
    let expected = (img.width as usize) * (img.height as usize) * 4;
    if img.rgba8.len() != expected {
        return Err(CardError::encode(format!(
            "raster buffer has {} bytes, expected {expected} for {}x{}",
            img.rgba8.len(),
            img.width,
            img.height
        )));
    }

    let mut out = Cursor::new(Vec::new());
    let (w, h) = (img.width, img.height);
    let rgba = image::ExtendedColorType::Rgba8;

    let res = match format {
        OutputFormat::Webp => {
            WebPEncoder::new_lossless(&mut out).write_image(&img.rgba8, w, h, rgba)
        }
        OutputFormat::Jpeg => {
            let rgb = img.flatten_to_rgb8(cfg.flatten_rgb);
            JpegEncoder::new_with_quality(&mut out, cfg.quality).write_image(
                &rgb,
                w,
                h,
                image::ExtendedColorType::Rgb8,
            )
        }
        OutputFormat::Png => {
            let compression = if cfg.near_lossless {
                CompressionType::Best
            } else {
                CompressionType::Default
            };
            PngEncoder::new_with_quality(&mut out, compression, FilterType::Adaptive)
                .write_image(&img.rgba8, w, h, rgba)
        }
        OutputFormat::Avif => {
            AvifEncoder::new_with_speed_quality(&mut out, cfg.avif_speed, cfg.quality)
                .write_image(&img.rgba8, w, h, rgba)
        }
        OutputFormat::Tiff => TiffEncoder::new(&mut out).write_image(&img.rgba8, w, h, rgba),
    };

    res.map_err(|e| CardError::encode(format!("{format}: {e}")))?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/formats.rs"]
mod tests;
