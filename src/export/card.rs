use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::config::ExportConfig;
use crate::encode::formats::{OutputFormat, encode_image};
use crate::foundation::error::CardResult;
use crate::render::raster::{RasterImage, rasterize_svg};
use crate::scene::model::Scene;

/// Outcome of writing one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardArtifact {
    /// Encoding of this file.
    pub format: OutputFormat,
    /// Target path.
    pub path: PathBuf,
    /// Bytes written, or the error message if encoding or writing failed.
    pub outcome: Result<usize, String>,
}

impl CardArtifact {
    /// `true` when the file reached disk.
    pub fn is_written(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-format outcomes for one exported card, in [`OutputFormat::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    /// Logical card name (file stem).
    pub name: String,
    /// One entry per format.
    pub artifacts: Vec<CardArtifact>,
}

impl ExportReport {
    /// Files that were written.
    pub fn written(&self) -> impl Iterator<Item = &CardArtifact> {
        self.artifacts.iter().filter(|a| a.is_written())
    }

    /// Files that failed to encode or write.
    pub fn failures(&self) -> impl Iterator<Item = &CardArtifact> {
        self.artifacts.iter().filter(|a| !a.is_written())
    }

    /// `true` when every format was written.
    pub fn is_complete(&self) -> bool {
        self.artifacts.iter().all(CardArtifact::is_written)
    }
}

/// `<out_dir>/<name>.<ext>`
pub fn artifact_path(out_dir: &Path, name: &str, format: OutputFormat) -> PathBuf {
    out_dir.join(format!("{name}.{}", format.extension()))
}

/// Rasterize `scene` once and write it in every [`OutputFormat`].
///
/// The five encodes run in parallel on the current rayon pool and are all joined before this
/// returns. A failing format does not stop the others; it is recorded in the report and left to the
/// caller to log. Only a scene that cannot be rendered at all is returned as an error.
#[tracing::instrument(skip(scene, cfg))]
pub fn export_card(
    name: &str,
    scene: &Scene,
    out_dir: &Path,
    cfg: &ExportConfig,
) -> CardResult<ExportReport> {
    let svg = scene.to_svg_bytes();
    let raster = rasterize_svg(&svg, cfg.canvas)?;

    let artifacts: Vec<CardArtifact> = OutputFormat::ALL
        .par_iter()
        .map(|&format| write_artifact(&raster, format, out_dir, name, cfg))
        .collect();

    for a in &artifacts {
        if let Ok(len) = &a.outcome {
            tracing::debug!(path = %a.path.display(), bytes = len, "wrote card file");
        }
    }

    Ok(ExportReport {
        name: name.to_owned(),
        artifacts,
    })
}

fn write_artifact(
    raster: &RasterImage,
    format: OutputFormat,
    out_dir: &Path,
    name: &str,
    cfg: &ExportConfig,
) -> CardArtifact {
    let path = artifact_path(out_dir, name, format);
    let outcome = encode_and_write(raster, format, &path, cfg).map_err(|e| format!("{e:#}"));
    CardArtifact {
        format,
        path,
        outcome,
    }
}

fn encode_and_write(
    raster: &RasterImage,
    format: OutputFormat,
    path: &Path,
    cfg: &ExportConfig,
) -> CardResult<usize> {
    let bytes = encode_image(raster, format, &cfg.encode)?;
    std::fs::write(path, &bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(bytes.len())
}

#[cfg(test)]
#[path = "../../tests/unit/export/card.rs"]
mod tests;
