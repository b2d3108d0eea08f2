//! Accessible-variant search: walk a color toward black or white until
//! it can carry text at a target contrast.
//!
//! A bounded linear search, not a closed-form solve: stepping every
//! channel by ±1 keeps hue and saturation approximately intact while
//! luminance moves monotonically toward the achievable.

use pairkit_color::{Hsl, Rgb};

use crate::contrast::{AA_NORMAL, contrast_ratio};

/// Hard cap on the channel walk. 255 steps reach the extreme from any
/// starting channel value, so the walk always terminates.
const MAX_STEPS: u32 = 255;

/// Step `base` toward black (`darken`) or white until it meets
/// `target_contrast` against the opposite extreme, or the walk is
/// exhausted.
///
/// Darkening checks contrast against pure white (dark text on a light
/// surface); lightening checks against pure black. Each step moves
/// every channel by one, so contrast against the reference never
/// decreases.
///
/// Best effort: if the target is unreachable the most extreme color
/// reached is returned, not an error.
#[must_use]
pub fn find_accessible_variant(base: Rgb, target_contrast: f64, darken: bool) -> Rgb {
    let reference = if darken { Rgb::WHITE } else { Rgb::BLACK };

    let mut current = base;
    for _ in 0..MAX_STEPS {
        if contrast_ratio(current, reference) >= target_contrast {
            break;
        }
        let next = step(current, darken);
        if next == current {
            // Saturated at the extreme; the target is unreachable.
            break;
        }
        current = next;
    }
    current
}

/// A color suggested to pair with a base color, tagged with the UI role
/// it was generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedPair {
    pub color: Rgb,
    /// Contrast ratio between the suggestion and the base color.
    pub contrast: f64,
    pub role: &'static str,
}

/// Generate the standard companion set for a base color: an
/// AA-compliant darker variant, an AA-compliant lighter variant, and
/// the HSL complement, each tagged with a role label and its contrast
/// against the base.
#[must_use]
pub fn suggested_pairs(base: Rgb) -> Vec<SuggestedPair> {
    let darker = find_accessible_variant(base, AA_NORMAL, true);
    let lighter = find_accessible_variant(base, AA_NORMAL, false);

    let hsl = base.to_hsl();
    let complementary = Hsl {
        h: (hsl.h + 180.0) % 360.0,
        ..hsl
    }
    .to_rgb();

    vec![
        SuggestedPair {
            color: darker,
            contrast: contrast_ratio(base, darker),
            role: "Text on Light Background",
        },
        SuggestedPair {
            color: lighter,
            contrast: contrast_ratio(base, lighter),
            role: "Text on Dark Background",
        },
        SuggestedPair {
            color: complementary,
            contrast: contrast_ratio(base, complementary),
            role: "Accent Color",
        },
    ]
}

fn step(color: Rgb, darken: bool) -> Rgb {
    if darken {
        Rgb::new(
            color.r.saturating_sub(1),
            color.g.saturating_sub(1),
            color.b.saturating_sub(1),
        )
    } else {
        Rgb::new(
            color.r.saturating_add(1),
            color.g.saturating_add(1),
            color.b.saturating_add(1),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
