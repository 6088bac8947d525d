use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};

/// A color in HSL space: hue in degrees, saturation and lightness in percent (0..=100).
///
/// Values are stored exactly as given. Out-of-range components are tolerated and only normalized
/// when converting to RGB: hue wraps into `[0, 360)`, saturation and lightness clamp to
/// `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Pure white.
    pub const WHITE: Self = Self::new(0.0, 0.0, 100.0);
    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a color from raw components.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same saturation and lightness, different hue.
    pub fn with_hue(self, h: f64) -> Self {
        Self { h, ..self }
    }

    /// Same hue and saturation, different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn parse_hex(s: &str) -> CardResult<Self> {
        let rgb = parse_hex_rgb(s).map_err(CardError::invalid_color)?;
        Ok(Self::from_rgb8(rgb))
    }

    /// Convert an opaque RGB8 color to HSL.
    pub fn from_rgb8(rgb: Rgba8) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let s = if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let h = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let h = (h * 60.0).rem_euclid(360.0);

        Self::new(h, s * 100.0, l * 100.0)
    }

    /// Convert to opaque RGB8, rounding each channel.
    pub fn to_rgb8(self) -> Rgba8 {
        let (r, g, b) = hsl_to_rgb_unit(self.h, self.s / 100.0, self.l / 100.0);

        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        Rgba8::opaque(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        let c = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            HslObj { h: f64, s: f64, l: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex_rgb(&s)
                .map(Self::from_rgb8)
                .map_err(serde::de::Error::custom),
            Repr::HslObj { h, s, l } => Ok(Self::new(h, s, l)),
        }
    }
}

fn parse_hex_rgb(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !digits.is_ascii() {
        return Err(format!("hex color \"{s}\" contains non-ASCII characters"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("hex color \"{s}\" contains non-hex digits"));
    }

    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                let v = hex_byte(&ch.to_string())?;
                *slot = v * 17;
            }
            Ok(Rgba8::opaque(out[0], out[1], out[2]))
        }
        6 => Ok(Rgba8::opaque(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        )),
        _ => Err(format!(
            "hex color \"{s}\" must be #RGB or #RRGGBB (case-insensitive)"
        )),
    }
}

/// HSL -> sRGB in unit range. `s` and `l` are fractions; `h` is in degrees.
fn hsl_to_rgb_unit(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return (l, l, l);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
