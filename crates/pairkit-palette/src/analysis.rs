//! Whole-palette analysis: per-color metrics, pairing
//! recommendations, and enhancement candidates.
//!
//! Everything in this module is derived on demand from the palette
//! slice; nothing is cached between calls. Empty palettes produce
//! empty output everywhere.

use pairkit_color::{Hsl, Rgb};

use crate::contrast::{
    AA_NORMAL, AAA_NORMAL, Severity, WcagStatus, contrast_ratio, relative_luminance,
};
use crate::harmony::ColorHarmony;
use crate::role::{ColorRole, assign_roles, suggest_usage};
use crate::variant::{SuggestedPair, find_accessible_variant, suggested_pairs};

/// A problematic pairing between two palette members.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastIssue {
    pub with: Rgb,
    pub ratio: f64,
    pub severity: Severity,
}

/// The full derived profile of one palette member.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAnalysis {
    pub color: Rgb,
    pub role: ColorRole,
    pub is_primary: bool,
    pub contrast_with_white: f64,
    pub contrast_with_black: f64,
    /// WCAG status of the better of the two extremes: a color passes a
    /// level if it can carry text on either a white or a black surface.
    pub wcag: WcagStatus,
    pub suggested_pairs: Vec<SuggestedPair>,
    pub harmony: ColorHarmony,
    pub usage: Vec<&'static str>,
    /// Every pairing with another member below the Good severity.
    pub contrast_issues: Vec<ContrastIssue>,
}

/// Analyze every member of a palette, in palette order.
#[must_use]
pub fn analyze_palette(palette: &[Rgb]) -> Vec<ColorAnalysis> {
    let assignments = assign_roles(palette);

    assignments
        .iter()
        .map(|assignment| {
            let color = assignment.color;
            let contrast_with_white = contrast_ratio(color, Rgb::WHITE);
            let contrast_with_black = contrast_ratio(color, Rgb::BLACK);

            let contrast_issues = palette
                .iter()
                .filter(|&&other| other != color)
                .filter_map(|&other| {
                    let ratio = contrast_ratio(color, other);
                    let severity = Severity::of(ratio);
                    (severity != Severity::Good).then_some(ContrastIssue {
                        with: other,
                        ratio,
                        severity,
                    })
                })
                .collect();

            ColorAnalysis {
                color,
                role: assignment.role,
                is_primary: assignment.is_primary,
                contrast_with_white,
                contrast_with_black,
                wcag: WcagStatus::classify(contrast_with_white.max(contrast_with_black)),
                suggested_pairs: suggested_pairs(color),
                harmony: ColorHarmony::of(color),
                usage: suggest_usage(color, assignment.role),
                contrast_issues,
            }
        })
        .collect()
}

/// A concrete foreground/background pairing recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecommendation {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub purpose: &'static str,
    pub contrast: f64,
    pub priority: u32,
    pub example: &'static str,
}

/// Recommend usable pairings among the palette members.
///
/// Every unordered pair with at least AA-normal contrast yields a set
/// of purpose-specific recommendations; 7:1 pairs additionally qualify
/// for call-to-action use with the darker color in front. Results are
/// sorted by priority, then contrast, then original pair order.
#[must_use]
pub fn recommend_pairs(palette: &[Rgb]) -> Vec<PairRecommendation> {
    let mut recommendations = Vec::new();

    for (i, &c1) in palette.iter().enumerate() {
        for &c2 in &palette[i + 1..] {
            let contrast = contrast_ratio(c1, c2);
            if contrast < AA_NORMAL {
                #[cfg(feature = "tracing")]
                tracing::debug!(first = %c1, second = %c2, contrast, "pair below AA, skipped");
                continue;
            }

            let mut priority: u32 = if contrast >= AAA_NORMAL { 2 } else { 1 };
            if passes_aaa_somewhere(c1) {
                priority += 1;
            }
            if passes_aaa_somewhere(c2) {
                priority += 1;
            }
            let harmony = ColorHarmony::of(c1);
            if harmony.complementary.contains(&c2) || harmony.analogous.contains(&c2) {
                priority += 1;
            }

            let (lighter, darker) = if relative_luminance(c1) > relative_luminance(c2) {
                (c1, c2)
            } else {
                (c2, c1)
            };

            if contrast >= AAA_NORMAL {
                recommendations.push(PairRecommendation {
                    primary: darker,
                    secondary: lighter,
                    purpose: "Primary Call-to-Action",
                    contrast,
                    priority: priority + 3,
                    example: "Buttons, Important Links",
                });
            }
            recommendations.push(PairRecommendation {
                primary: lighter,
                secondary: darker,
                purpose: "Content Sections",
                contrast,
                priority: priority + 2,
                example: "Text Content, Cards, Sections",
            });
            recommendations.push(PairRecommendation {
                primary: c1,
                secondary: c2,
                purpose: "Navigation Elements",
                contrast,
                priority: priority + 1,
                example: "Navigation Bars, Headers",
            });
            recommendations.push(PairRecommendation {
                primary: c2,
                secondary: c1,
                purpose: "Accent Elements",
                contrast,
                priority,
                example: "Icons, Borders, Highlights",
            });
        }
    }

    // Stable sort keeps original pair order on full ties.
    recommendations.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.contrast.total_cmp(&a.contrast))
    });
    recommendations
}

/// Which family of enhancement candidates to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementKind {
    /// AA-compliant darker and lighter variants.
    Contrast,
    /// Analogous and complementary companions.
    Harmony,
    /// Fixed lightness steps at the base hue.
    Shades,
}

/// A candidate color enhancing a base color, with display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Enhancement {
    pub color: Rgb,
    pub name: String,
    pub description: String,
}

/// Generate enhancement candidates of one kind for a base color.
#[must_use]
pub fn enhancements(base: Rgb, kind: EnhancementKind) -> Vec<Enhancement> {
    let hsl = base.to_hsl();
    let mut results = Vec::new();

    match kind {
        EnhancementKind::Contrast => {
            results.push(Enhancement {
                color: find_accessible_variant(base, AA_NORMAL, true),
                name: "Darker Variant".to_owned(),
                description: "Higher contrast for text on light backgrounds".to_owned(),
            });
            results.push(Enhancement {
                color: find_accessible_variant(base, AA_NORMAL, false),
                name: "Lighter Variant".to_owned(),
                description: "Higher contrast for text on dark backgrounds".to_owned(),
            });
        }
        EnhancementKind::Harmony => {
            let harmony = ColorHarmony::of(base);
            for (i, &color) in harmony.analogous.iter().enumerate() {
                results.push(Enhancement {
                    color,
                    name: format!("Analogous {}", i + 1),
                    description: "Colors adjacent on the color wheel".to_owned(),
                });
            }
            for &color in &harmony.complementary {
                results.push(Enhancement {
                    color,
                    name: "Complementary".to_owned(),
                    description: "Opposite on the color wheel for maximum contrast".to_owned(),
                });
            }
        }
        EnhancementKind::Shades => {
            for step in 1..=4u32 {
                let l = f64::from(step) * 0.2;
                let shade = Hsl { l, ..hsl }.to_rgb();
                let name = if l < hsl.l {
                    "Darker Shade"
                } else {
                    "Lighter Shade"
                };
                results.push(Enhancement {
                    color: shade,
                    name: name.to_owned(),
                    description: format!("{}% lightness variation", step * 20),
                });
            }
        }
    }

    results
}

/// Whether a color reaches AAA-normal contrast against either extreme.
fn passes_aaa_somewhere(color: Rgb) -> bool {
    contrast_ratio(color, Rgb::WHITE).max(contrast_ratio(color, Rgb::BLACK)) >= AAA_NORMAL
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    #[test]
    fn empty_palette_analyzes_to_nothing() {
        assert!(analyze_palette(&[]).is_empty());
        assert!(recommend_pairs(&[]).is_empty());
    }

    #[test]
    fn analysis_preserves_palette_order() {
        let palette = [hex("#0F172A"), hex("#2e86de"), hex("#E2E8F0")];
        let analysis = analyze_palette(&palette);
        let order: Vec<Rgb> = analysis.iter().map(|a| a.color).collect();
        assert_eq!(order, palette);
    }

    #[test]
    fn wcag_uses_better_extreme() {
        // Mid-blue reads on white but not on black at AAA; the status
        // reflects the better side.
        let analysis = analyze_palette(&[hex("#2e86de")]);
        let a = &analysis[0];
        assert_eq!(
            a.wcag,
            WcagStatus::classify(a.contrast_with_white.max(a.contrast_with_black))
        );
    }

    #[test]
    fn issues_exclude_good_pairs() {
        // Navy and near-white contrast well; no issue between them.
        let palette = [hex("#0F172A"), hex("#E2E8F0")];
        let analysis = analyze_palette(&palette);
        assert!(analysis[0].contrast_issues.is_empty());
        assert!(analysis[1].contrast_issues.is_empty());
    }

    #[test]
    fn issues_flag_close_colors() {
        let palette = [hex("#777777"), hex("#888888")];
        let analysis = analyze_palette(&palette);
        assert_eq!(analysis[0].contrast_issues.len(), 1);
        assert_eq!(analysis[0].contrast_issues[0].severity, Severity::Critical);
    }

    #[test]
    fn low_contrast_pairs_yield_no_recommendations() {
        assert!(recommend_pairs(&[hex("#777777"), hex("#888888")]).is_empty());
    }

    #[test]
    fn high_contrast_pair_gets_cta() {
        let recs = recommend_pairs(&[hex("#0F172A"), hex("#E2E8F0")]);
        let cta = recs
            .iter()
            .find(|r| r.purpose == "Primary Call-to-Action")
            .expect("14:1 pair should qualify for CTA");
        // The darker color fronts the call-to-action.
        assert_eq!(cta.primary, hex("#0F172A"));
        assert_eq!(cta.secondary, hex("#E2E8F0"));
    }

    #[test]
    fn recommendations_sorted_by_priority() {
        let recs = recommend_pairs(&[hex("#0F172A"), hex("#E2E8F0"), hex("#2e86de")]);
        for pair in recs.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
    }

    #[test]
    fn moderate_pair_has_no_cta() {
        // ~5:1 passes AA but not AAA; content/navigation/accent only.
        let palette = [hex("#767676"), hex("#ffffff")];
        let recs = recommend_pairs(&palette);
        assert!(!recs.is_empty());
        assert!(recs.iter().all(|r| r.purpose != "Primary Call-to-Action"));
    }

    #[test]
    fn contrast_enhancements_are_compliant() {
        let out = enhancements(hex("#6699cc"), EnhancementKind::Contrast);
        assert_eq!(out.len(), 2);
        assert!(contrast_ratio(out[0].color, Rgb::WHITE) >= AA_NORMAL);
        assert!(contrast_ratio(out[1].color, Rgb::BLACK) >= AA_NORMAL);
    }

    #[test]
    fn harmony_enhancements_count() {
        let out = enhancements(hex("#6699cc"), EnhancementKind::Harmony);
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].name, "Complementary");
    }

    #[test]
    fn shade_enhancements_step_lightness() {
        let out = enhancements(hex("#6699cc"), EnhancementKind::Shades);
        assert_eq!(out.len(), 4);
        let lightnesses: Vec<f64> = out.iter().map(|e| e.color.to_hsl().l).collect();
        for pair in lightnesses.windows(2) {
            assert!(pair[0] < pair[1], "shades should brighten: {lightnesses:?}");
        }
        assert_eq!(out[0].description, "20% lightness variation");
    }
}
