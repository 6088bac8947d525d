use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{CardError, CardResult};

const MAX_DIM: u32 = 16_384;

/// A rasterized card as straight-alpha RGBA8, tightly packed and row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba8: Vec<u8>,
}

impl RasterImage {
    /// Composite over an opaque background and drop alpha (RGB8, row-major).
    pub fn flatten_to_rgb8(&self, bg: [u8; 3]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rgba8.len() / 4 * 3);
        for px in self.rgba8.chunks_exact(4) {
            let a = u16::from(px[3]);
            let inv = 255 - a;
            for c in 0..3 {
                let v = (u16::from(px[c]) * a + u16::from(bg[c]) * inv + 127) / 255;
                out.push(v as u8);
            }
        }
        out
    }
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> CardResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Render `tree` scaled to exactly `size` pixels.
pub fn rasterize(tree: &usvg::Tree, size: Canvas) -> CardResult<RasterImage> {
    let Canvas { width, height } = Canvas::new(size.width, size.height)?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(CardError::invalid_argument(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let tree_size = tree.size();
    if !tree_size.width().is_finite() || tree_size.width() <= 0.0 {
        return Err(CardError::render("svg has invalid width"));
    }
    if !tree_size.height().is_finite() || tree_size.height() <= 0.0 {
        return Err(CardError::render("svg has invalid height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CardError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree_size.width();
    let sy = (height as f32) / tree_size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut rgba8 = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba8);

    Ok(RasterImage {
        width,
        height,
        rgba8,
    })
}

/// Parse and render SVG bytes in one step.
pub fn rasterize_svg(bytes: &[u8], size: Canvas) -> CardResult<RasterImage> {
    let tree = parse_svg(bytes)?;
    rasterize(&tree, size)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        match a {
            0 => {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
            }
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
