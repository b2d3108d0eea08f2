//! WCAG relative luminance, contrast ratio, and pass/fail
//! classification.
//!
//! The formulas follow WCAG 2.0 exactly, including the `0.03928`
//! linearization knee. Everything is computed in f64 from 8-bit
//! channels; results are deterministic and symmetric.

use pairkit_color::Rgb;

use crate::error::PaletteError;

/// Minimum contrast for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum contrast for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum contrast for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum contrast for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;

/// Compute the relative luminance of a color per WCAG 2.0.
///
/// Per-channel sRGB gamma decode
/// (`c <= 0.03928 ? c/12.92 : ((c+0.055)/1.055)^2.4`), then the
/// weighted sum `0.2126 R + 0.7152 G + 0.0722 B`.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    let r_lin = gamma_decode(r);
    let g_lin = gamma_decode(g);
    let b_lin = gamma_decode(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex color strings.
///
/// # Errors
///
/// Returns [`PaletteError::Color`] when either string fails the hex
/// parsing boundary.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, PaletteError> {
    let a = Rgb::from_hex(a)?;
    let b = Rgb::from_hex(b)?;
    Ok(contrast_ratio(a, b))
}

/// Pass/fail status of a contrast ratio against the four standard
/// WCAG thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WcagStatus {
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl WcagStatus {
    /// Classify a ratio against the fixed thresholds
    /// (AA 4.5 / 3.0, AAA 7.0 / 4.5).
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        Self {
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }

    /// Whether the ratio passes at least the weakest threshold.
    #[must_use]
    pub const fn passes_any(self) -> bool {
        self.aa_large
    }
}

/// Coarse severity bucket for a color pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Below 3:1, unusable for text at any size.
    Critical,
    /// Below 4.5:1, only large text qualifies.
    Moderate,
    /// 4.5:1 or better.
    Good,
}

impl Severity {
    #[must_use]
    pub fn of(ratio: f64) -> Self {
        if ratio < AA_LARGE {
            Self::Critical
        } else if ratio < AA_NORMAL {
            Self::Moderate
        } else {
            Self::Good
        }
    }
}

/// Per-channel sRGB linearization (WCAG 2.0 constants).
#[inline]
fn gamma_decode(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
