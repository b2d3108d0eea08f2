// SPDX-License-Identifier: MIT
//
// HSL, the cylindrical view used by harmony generation.

use crate::error::ColorError;
use crate::rgb::{Rgb, unit_to_u8};

/// A color in HSL (hue, saturation, lightness) space.
///
/// Units: `h` in degrees [0, 360), `s` and `l` as fractions [0, 1].
/// These are the only units pairkit uses for HSL; call sites that think
/// in percentages must divide by 100 before constructing one.
///
/// HSL is a derived, ephemeral view of an [`Rgb`] value: hue rotation
/// for harmony variants happens here, then the result converts straight
/// back to RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Construct a validated HSL value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRange`] when `h` is outside
    /// [0, 360) or `s`/`l` are outside [0, 1].
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        check_hue(h)?;
        check_unit("saturation", s)?;
        check_unit("lightness", l)?;
        Ok(Self { h, s, l })
    }

    /// Parse a hex color and convert it to HSL.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] on a malformed hex string.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(s).map(Rgb::to_hsl)
    }

    /// Convert back to RGB.
    ///
    /// Inverse of [`Rgb::to_hsl`] within ±1 per channel (integer
    /// rounding).
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, l } = self;

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0f64.mul_add(l, -q);
        let hk = h / 360.0;

        // The blue-channel remainder can be negative; hue_to_channel
        // folds t < 0 back into [0, 1).
        let r = hue_to_channel(p, q, (hk + 1.0 / 3.0) % 1.0);
        let g = hue_to_channel(p, q, hk % 1.0);
        let b = hue_to_channel(p, q, (hk - 1.0 / 3.0) % 1.0);

        Rgb::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    /// Convert to the canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Rgb {
    /// Convert to HSL.
    ///
    /// Gray inputs (`max == min`) are achromatic: hue is undefined, so
    /// the result carries `h = 0, s = 0`.
    #[must_use]
    #[allow(clippy::float_cmp)] // max is a copy of exactly one channel
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_unit();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }
}

/// One channel of the HSL → RGB conversion (the classic `hue2rgb`
/// helper). `t` may arrive slightly outside [0, 1); the first step folds
/// it back.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        return (q - p).mul_add(6.0 * t, p);
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p);
    }
    p
}

/// Validate a hue angle: degrees in [0, 360).
pub(crate) fn check_hue(value: f64) -> Result<(), ColorError> {
    if value.is_finite() && (0.0..360.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::InvalidRange {
            component: "hue",
            value,
            range: "[0, 360)",
        })
    }
}

/// Validate a fractional component: [0, 1] inclusive.
pub(crate) fn check_unit(component: &'static str, value: f64) -> Result<(), ColorError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::InvalidRange {
            component,
            value,
            range: "[0, 1]",
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn gray_is_achromatic() {
        let hsl = Rgb::new(128, 128, 128).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 1e-9), "gray hue: {}", hsl.h);
        assert!(approx_eq(hsl.s, 0.0, 1e-9), "gray saturation: {}", hsl.s);
        assert!(approx_eq(hsl.l, 0.502, 0.001), "gray lightness: {}", hsl.l);
    }

    #[test]
    fn pure_red() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert!(approx_eq(hsl.h, 0.0, 1e-9));
        assert!(approx_eq(hsl.s, 1.0, 1e-9));
        assert!(approx_eq(hsl.l, 0.5, 1e-9));
    }

    #[test]
    fn pure_green_hue_is_120() {
        let hsl = Rgb::new(0, 255, 0).to_hsl();
        assert!(approx_eq(hsl.h, 120.0, 1e-9), "green hue: {}", hsl.h);
    }

    #[test]
    fn pure_blue_hue_is_240() {
        let hsl = Rgb::new(0, 0, 255).to_hsl();
        assert!(approx_eq(hsl.h, 240.0, 1e-9), "blue hue: {}", hsl.h);
    }

    #[test]
    fn hue_stays_in_range() {
        // A color where g < b pushes the red arm through the +6 branch.
        let hsl = Rgb::new(255, 0, 128).to_hsl();
        assert!((0.0..360.0).contains(&hsl.h), "hue out of range: {}", hsl.h);
    }

    #[test]
    fn black_and_white_lightness() {
        assert!(approx_eq(Rgb::BLACK.to_hsl().l, 0.0, 1e-9));
        assert!(approx_eq(Rgb::WHITE.to_hsl().l, 1.0, 1e-9));
    }

    #[test]
    fn new_validates_hue() {
        assert!(Hsl::new(360.0, 0.5, 0.5).is_err());
        assert!(Hsl::new(-0.1, 0.5, 0.5).is_err());
        assert!(Hsl::new(359.9, 0.5, 0.5).is_ok());
    }

    #[test]
    fn new_validates_fractions() {
        assert!(Hsl::new(180.0, 1.5, 0.5).is_err());
        assert!(Hsl::new(180.0, 0.5, -0.2).is_err());
        assert!(Hsl::new(180.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(Hsl::new(f64::NAN, 0.5, 0.5).is_err());
        assert!(Hsl::new(180.0, f64::INFINITY, 0.5).is_err());
    }

    #[test]
    fn saturated_round_trip_is_exact() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#00ffff", "#ff00ff"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!(rgb.to_hsl().to_rgb(), rgb, "round trip for {hex}");
        }
    }

    #[test]
    fn red_complement_is_cyan() {
        let hsl = Hsl::from_hex("#ff0000").unwrap();
        let complement = Hsl {
            h: (hsl.h + 180.0) % 360.0,
            ..hsl
        };
        assert_eq!(complement.to_hex(), "#00ffff");
    }

    proptest! {
        /// RGB → HSL → RGB reproduces every channel within ±1.
        #[test]
        fn round_trip_within_one(r: u8, g: u8, b: u8) {
            let rgb = Rgb::new(r, g, b);
            let back = rgb.to_hsl().to_rgb();
            prop_assert!(i16::from(back.r).abs_diff(i16::from(rgb.r)) <= 1);
            prop_assert!(i16::from(back.g).abs_diff(i16::from(rgb.g)) <= 1);
            prop_assert!(i16::from(back.b).abs_diff(i16::from(rgb.b)) <= 1);
        }

        /// Conversion output always satisfies the documented unit ranges.
        #[test]
        fn conversion_output_in_range(r: u8, g: u8, b: u8) {
            let hsl = Rgb::new(r, g, b).to_hsl();
            prop_assert!((0.0..360.0).contains(&hsl.h));
            prop_assert!((0.0..=1.0).contains(&hsl.s));
            prop_assert!((0.0..=1.0).contains(&hsl.l));
        }
    }
}
