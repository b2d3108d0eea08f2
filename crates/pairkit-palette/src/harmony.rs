//! Color harmony variants: fixed hue rotations plus monochromatic
//! lightness/saturation shifts, all computed via the HSL round-trip.

use pairkit_color::{Hsl, Rgb};

/// The classic harmony sets derived from a single base color.
///
/// Every entry preserves the base saturation and lightness and rotates
/// hue by a fixed offset, except `monochromatic`, which keeps the hue
/// and varies lightness/saturation within clamped bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorHarmony {
    /// Hue -30 and +30.
    pub analogous: Vec<Rgb>,
    /// Hue +180.
    pub complementary: Vec<Rgb>,
    /// Hue +120 and +240.
    pub triadic: Vec<Rgb>,
    /// Hue +90, +180, +270.
    pub tetradic: Vec<Rgb>,
    /// Hue +150 and +210.
    pub split: Vec<Rgb>,
    /// Darker (l-0.3, floor 0.2), desaturated (s-0.2, floor 0.5),
    /// lighter (l+0.3, cap 0.9).
    pub monochromatic: Vec<Rgb>,
}

impl ColorHarmony {
    /// Compute every harmony set for a base color.
    #[must_use]
    pub fn of(base: Rgb) -> Self {
        let hsl = base.to_hsl();

        Self {
            analogous: vec![rotate(hsl, -30.0), rotate(hsl, 30.0)],
            complementary: vec![rotate(hsl, 180.0)],
            triadic: vec![rotate(hsl, 120.0), rotate(hsl, 240.0)],
            tetradic: vec![rotate(hsl, 90.0), rotate(hsl, 180.0), rotate(hsl, 270.0)],
            split: vec![rotate(hsl, 150.0), rotate(hsl, 210.0)],
            monochromatic: vec![
                Hsl {
                    l: (hsl.l - 0.3).max(0.2),
                    ..hsl
                }
                .to_rgb(),
                Hsl {
                    s: (hsl.s - 0.2).max(0.5),
                    ..hsl
                }
                .to_rgb(),
                Hsl {
                    l: (hsl.l + 0.3).min(0.9),
                    ..hsl
                }
                .to_rgb(),
            ],
        }
    }

    /// Whether `other` appears in any harmony set.
    #[must_use]
    pub fn contains(&self, other: Rgb) -> bool {
        self.iter_all().any(|c| c == other)
    }

    /// Iterate every generated variant across all sets.
    pub fn iter_all(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.analogous
            .iter()
            .chain(&self.complementary)
            .chain(&self.triadic)
            .chain(&self.tetradic)
            .chain(&self.split)
            .chain(&self.monochromatic)
            .copied()
    }
}

/// Rotate hue by `degrees` (negative offsets wrap) and convert back.
fn rotate(hsl: Hsl, degrees: f64) -> Rgb {
    Hsl {
        h: (hsl.h + degrees).rem_euclid(360.0),
        ..hsl
    }
    .to_rgb()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
