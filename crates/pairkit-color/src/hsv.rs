// SPDX-License-Identifier: MIT
//
// HSV, the cylindrical view used by interactive color pickers.

use crate::error::ColorError;
use crate::hsl::{check_hue, check_unit};
use crate::rgb::{Rgb, unit_to_u8};

/// A color in HSV (hue, saturation, value) space.
///
/// Units: `h` in degrees [0, 360), `s` and `v` as fractions [0, 1],
/// the same conventions as [`Hsl`](crate::Hsl). Pickers map `s` to the
/// horizontal axis and `1 - v` to the vertical one; the numeric core
/// only does the conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Construct a validated HSV value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRange`] when `h` is outside
    /// [0, 360) or `s`/`v` are outside [0, 1].
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self, ColorError> {
        check_hue(h)?;
        check_unit("saturation", s)?;
        check_unit("value", v)?;
        Ok(Self { h, s, v })
    }

    /// Parse a hex color and convert it to HSV.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] on a malformed hex string.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(s).map(Rgb::to_hsv)
    }

    /// Convert back to RGB via the chroma construction.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, v } = self;

        let chroma = v * s;
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Rgb::new(unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
    }

    /// Convert to the canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Rgb {
    /// Convert to HSV.
    ///
    /// Black (`v = 0`) and gray (`delta = 0`) inputs are achromatic:
    /// saturation and hue degrade to 0 rather than dividing by zero.
    #[must_use]
    #[allow(clippy::float_cmp)] // max is a copy of exactly one channel
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.to_unit();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max <= 0.0 { 0.0 } else { delta / max };

        let h = if delta <= 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut h = h * 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Hsv { h, s, v }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
