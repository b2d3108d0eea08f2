//! Font-pairing contrast heuristics.
//!
//! "Contrast" here is visual distinctness between a heading and a body
//! typeface, summarized on a 0–100 scale by a fixed category rule
//! table plus jitter inside each band, so repeated calls return varied
//! scores rather than one fixed value per pair. All variety flows
//! through the injected [`Xorshift32`]; with a fixed seed every
//! function in this module is deterministic.

use std::collections::BTreeSet;

use crate::category::{FontCategory, FontRecord};
use crate::rng::Xorshift32;

/// A heading/body category rule: which heading categories pair with
/// which body categories at a given contrast band.
type Rule = (&'static [FontCategory], &'static [FontCategory]);

use FontCategory::{Display, Handwriting, Monospace, SansSerif, Serif};

/// Category pairs that read as strongly distinct (scores 70–100).
const HIGH_CONTRAST: &[Rule] = &[
    (&[Display, Serif], &[SansSerif]),
    (&[Serif], &[SansSerif]),
    (&[Monospace], &[Serif, SansSerif, Display]),
    (&[Handwriting], &[SansSerif]),
];

/// Category pairs with moderate distinctness (scores 40–70).
const MEDIUM_CONTRAST: &[Rule] = &[
    (&[SansSerif], &[Serif]),
    (&[Display], &[Serif]),
    (&[Serif], &[Serif]),
];

/// Category pairs that read as near-uniform (scores 0–40).
const LOW_CONTRAST: &[Rule] = &[
    (&[SansSerif], &[SansSerif]),
    (&[Serif], &[Serif]),
];

/// Heading/body combinations generally considered good pairings.
const RECOMMENDED_COMBINATIONS: &[Rule] = &[
    (&[Display, Serif], &[SansSerif]),
    (&[SansSerif], &[Serif]),
    (&[Serif], &[SansSerif]),
    (&[Serif], &[Serif]),
    (&[SansSerif], &[SansSerif]),
    (&[Display], &[Serif, SansSerif]),
];

/// Whether a heading/body category pair appears in the recommended
/// combination list.
#[must_use]
pub fn is_recommended_combination(heading: FontCategory, body: FontCategory) -> bool {
    table_matches(RECOMMENDED_COMBINATIONS, heading, body)
}

/// Score the visual contrast of a heading/body category pair on the
/// 0–100 scale.
///
/// `identical` marks two references to the same font family, which
/// always scores 0. Otherwise: same category lands in [30, 40], a
/// high-contrast table hit in [70, 100], a medium hit in [40, 70], and
/// anything else in [35, 75]. The exact value inside each band is
/// jitter from `rng`: a range contract, not a bit-exact score.
#[must_use]
pub fn font_contrast_categories(
    heading: FontCategory,
    body: FontCategory,
    identical: bool,
    rng: &mut Xorshift32,
) -> f64 {
    if identical {
        return 0.0;
    }

    if heading == body {
        // The band top is compressed onto 40: values land in [30, 45]
        // and then clamp.
        return rng.range_f64(30.0, 45.0).min(40.0);
    }

    if table_matches(HIGH_CONTRAST, heading, body) {
        return rng.range_f64(70.0, 100.0);
    }

    if table_matches(MEDIUM_CONTRAST, heading, body) {
        return rng.range_f64(40.0, 70.0);
    }

    rng.range_f64(35.0, 75.0)
}

/// Score the visual contrast of two catalog records.
///
/// Identity is decided by family name equality, then the categories
/// go through [`font_contrast_categories`].
#[must_use]
pub fn font_contrast(heading: &FontRecord, body: &FontRecord, rng: &mut Xorshift32) -> f64 {
    font_contrast_categories(
        heading.categorize(),
        body.categorize(),
        heading.family == body.family,
        rng,
    )
}

/// Find a body font for `heading` whose contrast score sits closest to
/// `desired_contrast`.
///
/// The rule set is chosen by the desired band (>= 70 high, >= 40
/// medium, else low) and falls back to the medium table when no rule
/// mentions the heading category. Candidates outside the permitted
/// body categories, or sharing the heading's family, are dropped. The
/// survivors are scored by distance to the target and one of the best
/// five is picked at random, so repeated calls vary instead of always
/// returning the single best match.
///
/// Returns `None` when no candidate survives filtering.
#[must_use]
pub fn find_matching_body_font<'a>(
    heading: &FontRecord,
    candidates: &'a [FontRecord],
    desired_contrast: f64,
    rng: &mut Xorshift32,
) -> Option<&'a FontRecord> {
    let refs: Vec<&FontRecord> = candidates.iter().collect();
    find_matching_among(heading, &refs, desired_contrast, rng)
}

fn find_matching_among<'a>(
    heading: &FontRecord,
    candidates: &[&'a FontRecord],
    desired_contrast: f64,
    rng: &mut Xorshift32,
) -> Option<&'a FontRecord> {
    if candidates.is_empty() {
        return None;
    }

    let heading_category = heading.categorize();

    let mut rules: &[Rule] = if desired_contrast >= 70.0 {
        HIGH_CONTRAST
    } else if desired_contrast >= 40.0 {
        MEDIUM_CONTRAST
    } else {
        LOW_CONTRAST
    };

    // No rule mentions this heading category at the desired band:
    // fall back to the whole medium table.
    if !rules.iter().any(|(h, _)| h.contains(&heading_category)) {
        rules = MEDIUM_CONTRAST;
    }

    let mut body_categories: BTreeSet<FontCategory> = rules
        .iter()
        .filter(|(h, _)| h.contains(&heading_category))
        .flat_map(|(_, bodies)| bodies.iter().copied())
        .collect();

    if body_categories.is_empty() {
        // Still nothing: open up every non-handwriting category.
        body_categories.extend([Serif, SansSerif, Display, Monospace]);
    }

    let mut scored: Vec<(&FontRecord, f64)> = candidates
        .iter()
        .filter(|font| {
            body_categories.contains(&font.categorize()) && font.family != heading.family
        })
        .map(|&font| {
            let contrast = font_contrast(heading, font, rng);
            (font, (contrast - desired_contrast).abs())
        })
        .collect();

    if scored.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            heading = %heading.family,
            desired_contrast,
            "no body candidate survived category filtering"
        );
        return None;
    }

    // Stable sort: equal distances keep candidate order.
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    let top = scored.len().min(5);
    Some(scored[rng.pick_index(top)].0)
}

/// A complete generated pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct FontPairing {
    pub heading: FontRecord,
    pub body: FontRecord,
    /// Display name, e.g. `"High Contrast Serif Pairing"`.
    pub name: String,
}

/// Generate a heading/body pairing from a catalog at a desired
/// contrast level.
///
/// Only latin-subset fonts are considered. The heading pool depends on
/// the desired band (display/serif for high contrast, widening toward
/// sans-serif as the target drops) and excludes the fonts currently in
/// use; the body comes from [`find_matching_body_font`] over the whole
/// compatible pool.
///
/// Returns `None` when the catalog has no usable heading or no body
/// match.
#[must_use]
pub fn generate_pairing(
    fonts: &[FontRecord],
    desired_contrast: f64,
    current_heading: Option<&str>,
    current_body: Option<&str>,
    rng: &mut Xorshift32,
) -> Option<FontPairing> {
    let compatible: Vec<&FontRecord> = fonts.iter().filter(|f| f.has_latin()).collect();

    let heading_categories: &[FontCategory] = if desired_contrast >= 70.0 {
        &[Display, Serif]
    } else if desired_contrast >= 40.0 {
        &[Serif, SansSerif, Display]
    } else {
        &[SansSerif, Serif]
    };

    let potential: Vec<&FontRecord> = compatible
        .iter()
        .filter(|f| heading_categories.contains(&f.categorize()))
        .copied()
        .collect();

    let fresh: Vec<&FontRecord> = potential
        .iter()
        .filter(|f| {
            Some(f.family.as_str()) != current_heading && Some(f.family.as_str()) != current_body
        })
        .copied()
        .collect();

    let heading = if fresh.is_empty() {
        *potential.first()?
    } else {
        fresh[rng.pick_index(fresh.len())]
    };

    let body = find_matching_among(heading, &compatible, desired_contrast, rng)?;

    let level = if desired_contrast >= 70.0 {
        "High Contrast"
    } else if desired_contrast >= 40.0 {
        "Balanced"
    } else {
        "Harmonious"
    };
    let suffix = match heading.categorize() {
        Display => " Display",
        Serif => " Serif",
        SansSerif => " Sans",
        Handwriting | Monospace => "",
    };

    Some(FontPairing {
        heading: heading.clone(),
        body: body.clone(),
        name: format!("{level}{suffix} Pairing"),
    })
}

fn table_matches(table: &[Rule], heading: FontCategory, body: FontCategory) -> bool {
    table
        .iter()
        .any(|(headings, bodies)| headings.contains(&heading) && bodies.contains(&body))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(family: &str, category: FontCategory) -> FontRecord {
        FontRecord::new(family, category)
    }

    fn catalog() -> Vec<FontRecord> {
        vec![
            record("Playfair Display", Display),
            record("Lora", Serif),
            record("Merriweather", Serif),
            record("Inter", SansSerif),
            record("Open Sans", SansSerif),
            record("JetBrains Mono", Monospace),
            record("Caveat", Handwriting),
        ]
    }

    #[test]
    fn identical_family_scores_zero() {
        let mut rng = Xorshift32::new(1);
        let lora = record("Lora", Serif);
        assert!((font_contrast(&lora, &lora.clone(), &mut rng) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn same_category_band() {
        let mut rng = Xorshift32::new(2);
        for _ in 0..200 {
            let score = font_contrast_categories(Serif, Serif, false, &mut rng);
            assert!((30.0..=40.0).contains(&score), "out of band: {score}");
        }
    }

    #[test]
    fn serif_over_sans_is_high_contrast() {
        // The canonical high-contrast pairing: always lands in [70, 100].
        let mut rng = Xorshift32::new(3);
        for _ in 0..200 {
            let score = font_contrast_categories(Serif, SansSerif, false, &mut rng);
            assert!((70.0..=100.0).contains(&score), "out of band: {score}");
        }
    }

    #[test]
    fn monospace_headings_are_high_contrast() {
        let mut rng = Xorshift32::new(4);
        for body in [Serif, SansSerif, Display] {
            let score = font_contrast_categories(Monospace, body, false, &mut rng);
            assert!((70.0..=100.0).contains(&score), "mono/{body} scored {score}");
        }
    }

    #[test]
    fn sans_over_serif_is_medium() {
        let mut rng = Xorshift32::new(5);
        for _ in 0..200 {
            let score = font_contrast_categories(SansSerif, Serif, false, &mut rng);
            assert!((40.0..=70.0).contains(&score), "out of band: {score}");
        }
    }

    #[test]
    fn unlisted_pair_uses_default_band() {
        // sans-serif heading over a display body is in no table.
        let mut rng = Xorshift32::new(6);
        for _ in 0..200 {
            let score = font_contrast_categories(SansSerif, Display, false, &mut rng);
            assert!((35.0..=75.0).contains(&score), "out of band: {score}");
        }
    }

    #[test]
    fn recommended_combinations() {
        assert!(is_recommended_combination(Serif, SansSerif));
        assert!(is_recommended_combination(Display, SansSerif));
        assert!(!is_recommended_combination(Handwriting, Monospace));
    }

    #[test]
    fn matching_is_deterministic_per_seed() {
        let fonts = catalog();
        let heading = record("Playfair Display", Display);
        let a = find_matching_body_font(&heading, &fonts, 80.0, &mut Xorshift32::new(42));
        let b = find_matching_body_font(&heading, &fonts, 80.0, &mut Xorshift32::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn matching_never_returns_the_heading_family() {
        let fonts = catalog();
        let heading = record("Inter", SansSerif);
        for seed in 0..50 {
            let mut rng = Xorshift32::new(seed);
            if let Some(body) = find_matching_body_font(&heading, &fonts, 50.0, &mut rng) {
                assert_ne!(body.family, "Inter");
            }
        }
    }

    #[test]
    fn high_contrast_serif_heading_gets_sans_body() {
        let fonts = catalog();
        let heading = record("Lora", Serif);
        for seed in 0..50 {
            let mut rng = Xorshift32::new(seed);
            let body = find_matching_body_font(&heading, &fonts, 85.0, &mut rng)
                .expect("catalog has sans-serif candidates");
            assert_eq!(body.categorize(), SansSerif);
        }
    }

    #[test]
    fn handwriting_heading_at_low_contrast_falls_back_to_medium() {
        // No low-contrast rule mentions handwriting; the medium table
        // takes over, and its handwriting-free heading lists leave the
        // full non-handwriting category fallback.
        let fonts = catalog();
        let heading = record("Caveat", Handwriting);
        let mut rng = Xorshift32::new(11);
        let body = find_matching_body_font(&heading, &fonts, 20.0, &mut rng)
            .expect("fallback should open all non-handwriting categories");
        assert_ne!(body.categorize(), Handwriting);
    }

    #[test]
    fn matching_empty_candidates_is_none() {
        let heading = record("Lora", Serif);
        let mut rng = Xorshift32::new(1);
        assert_eq!(find_matching_body_font(&heading, &[], 50.0, &mut rng), None);
    }

    #[test]
    fn pairing_name_reflects_band_and_category() {
        let fonts = catalog();
        for seed in 0..20 {
            let mut rng = Xorshift32::new(seed);
            let pairing = generate_pairing(&fonts, 85.0, None, None, &mut rng)
                .expect("catalog supports high-contrast pairings");
            assert!(
                pairing.name.starts_with("High Contrast"),
                "name: {}",
                pairing.name
            );
            assert!(pairing.name.ends_with(" Pairing"), "name: {}", pairing.name);
            // High-contrast headings come from the display/serif pool.
            assert!(matches!(pairing.heading.categorize(), Display | Serif));
        }
    }

    #[test]
    fn pairing_excludes_current_fonts() {
        let fonts = vec![
            record("Lora", Serif),
            record("Merriweather", Serif),
            record("Inter", SansSerif),
        ];
        for seed in 0..30 {
            let mut rng = Xorshift32::new(seed);
            let pairing =
                generate_pairing(&fonts, 85.0, Some("Lora"), Some("Inter"), &mut rng).unwrap();
            assert_eq!(pairing.heading.family, "Merriweather");
        }
    }

    #[test]
    fn pairing_skips_non_latin_fonts() {
        let mut noto = record("Noto Sans JP", SansSerif);
        noto.subsets = vec!["japanese".to_owned()];
        let fonts = vec![record("Lora", Serif), record("Inter", SansSerif), noto];
        for seed in 0..30 {
            let mut rng = Xorshift32::new(seed);
            let pairing = generate_pairing(&fonts, 85.0, None, None, &mut rng).unwrap();
            assert_ne!(pairing.heading.family, "Noto Sans JP");
            assert_ne!(pairing.body.family, "Noto Sans JP");
        }
    }

    #[test]
    fn pairing_on_empty_catalog_is_none() {
        let mut rng = Xorshift32::new(1);
        assert_eq!(generate_pairing(&[], 50.0, None, None, &mut rng), None);
    }

    #[test]
    fn balanced_band_name() {
        let fonts = catalog();
        let mut rng = Xorshift32::new(9);
        let pairing = generate_pairing(&fonts, 55.0, None, None, &mut rng).unwrap();
        assert!(pairing.name.starts_with("Balanced"), "name: {}", pairing.name);
    }
}
