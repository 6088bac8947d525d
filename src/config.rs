use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::hsl::Hsl;
use crate::color::sweep::DEFAULT_DARKEN;
use crate::encode::formats::EncodeConfig;
use crate::foundation::core::{CARD_CANVAS, Canvas};
use crate::foundation::error::{CardError, CardResult};

/// Hue 83°, fully saturated, 45% lightness.
pub const DEFAULT_BASE_COLOR: Hsl = Hsl::new(83.0, 100.0, 45.0);
/// Number of cards produced per run.
pub const DEFAULT_CARD_COUNT: usize = 20;
/// Output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "output";

/// Settings for exporting a single card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Raster size in pixels.
    pub canvas: Canvas,
    /// Encoder settings applied to every format.
    pub encode: EncodeConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            canvas: CARD_CANVAS,
            encode: EncodeConfig::default(),
        }
    }
}

/// Everything a generator run needs. `Default` holds the fixed production constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Directory receiving `<index>.<ext>` files.
    pub out_dir: PathBuf,
    /// Only saturation and lightness are used; hues come from the sweep.
    pub base: Hsl,
    /// Number of cards, one per swept hue.
    pub count: usize,
    /// Lightness offset between a card's primary and secondary color.
    pub darken: f64,
    /// Worker threads for export. `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Per-card export settings.
    pub export: ExportConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            base: DEFAULT_BASE_COLOR,
            count: DEFAULT_CARD_COUNT,
            darken: DEFAULT_DARKEN,
            threads: None,
            export: ExportConfig::default(),
        }
    }
}

impl CardConfig {
    /// Reject settings that cannot produce a run (zero cards, zero threads, empty canvas, ...).
    pub fn validate(&self) -> CardResult<()> {
        if self.count == 0 {
            return Err(CardError::invalid_argument("card count must be at least 1"));
        }
        if !self.darken.is_finite() {
            return Err(CardError::invalid_argument("darken amount must be finite"));
        }
        if let Some(0) = self.threads {
            return Err(CardError::invalid_argument(
                "threads must be >= 1 when set",
            ));
        }
        Canvas::new(self.export.canvas.width, self.export.canvas.height)?;
        self.export.encode.validate()
    }
}
