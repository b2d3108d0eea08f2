//! Color role assignment: which member of a palette should act as
//! primary, accent, background, text, and so on.
//!
//! A role is not an intrinsic property of a color. It is assigned
//! relative to the other palette members, so re-deriving roles for a
//! different palette can change the answer. Assignment is fully
//! deterministic: ties resolve to the first color in palette order.

use pairkit_color::Rgb;

use crate::contrast::contrast_ratio;
use crate::error::PaletteError;

/// The intended UI usage of a color within a specific palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Tertiary,
    Accent,
    Background,
    Surface,
    Text,
}

impl ColorRole {
    /// The wire/display name of this role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Text => "text",
        }
    }

    /// Parse a role from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|r| r.name() == lower).copied()
    }

    /// All role values.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Primary,
            Self::Secondary,
            Self::Tertiary,
            Self::Accent,
            Self::Background,
            Self::Surface,
            Self::Text,
        ]
    }
}

/// One palette member with its assigned role.
///
/// `is_primary` marks the palette's single primary pick. It agrees
/// with `role == ColorRole::Primary` except when every color was
/// claimed by the lightness extremes (all background/text): then the
/// best candidate keeps its descriptive role and carries the flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleAssignment {
    pub color: Rgb,
    pub role: ColorRole,
    pub is_primary: bool,
}

/// Score how prominent a color is relative to its palette.
///
/// Weighted sum of saturation (doubled), closeness of lightness to
/// mid-tone, and the mean contrast ratio against the other members
/// (scaled by 1/5). The absolute value is meaningless; only the
/// ordering within one palette matters.
#[must_use]
pub fn prominence_score(color: Rgb, palette: &[Rgb]) -> f64 {
    let hsl = color.to_hsl();

    let mut score = 2.0 * hsl.s;
    score += 1.0 - (0.5 - hsl.l).abs();

    if !palette.is_empty() {
        // Entries equal to `color` contribute zero but still count in
        // the mean, so duplicates dilute rather than inflate.
        let total: f64 = palette
            .iter()
            .map(|&other| {
                if other == color {
                    0.0
                } else {
                    contrast_ratio(color, other)
                }
            })
            .sum();
        score += total / palette.len() as f64 / 5.0;
    }

    score
}

/// Assign a role to every palette member.
///
/// Two deterministic passes:
///
/// 1. Lightness extremes win outright: l > 0.9 becomes `Background`,
///    l < 0.2 becomes `Text`, regardless of prominence.
/// 2. Among the remaining colors the single highest prominence score
///    becomes `Primary` (first in palette order on a tie). Others with
///    saturation > 0.4 become `Accent`; the rest `Secondary`.
///
/// If pass 1 claims every color, the highest-prominence member overall
/// is flagged primary while keeping its descriptive role, so a
/// non-empty palette always has exactly one `is_primary` entry. An
/// empty palette yields an empty vec.
#[must_use]
pub fn assign_roles(palette: &[Rgb]) -> Vec<RoleAssignment> {
    if palette.is_empty() {
        return Vec::new();
    }

    let hsls: Vec<_> = palette.iter().map(|c| c.to_hsl()).collect();
    let fixed: Vec<Option<ColorRole>> = hsls
        .iter()
        .map(|hsl| {
            if hsl.l > 0.9 {
                Some(ColorRole::Background)
            } else if hsl.l < 0.2 {
                Some(ColorRole::Text)
            } else {
                None
            }
        })
        .collect();

    let scores: Vec<f64> = palette
        .iter()
        .map(|&c| prominence_score(c, palette))
        .collect();

    // Strict > keeps the first index on equal scores.
    let mut primary: Option<usize> = None;
    for i in 0..palette.len() {
        if fixed[i].is_some() {
            continue;
        }
        match primary {
            Some(best) if scores[i] <= scores[best] => {}
            _ => primary = Some(i),
        }
    }

    let fallback = primary.is_none();
    if fallback {
        let mut best = 0;
        for i in 1..palette.len() {
            if scores[i] > scores[best] {
                best = i;
            }
        }
        primary = Some(best);
    }

    palette
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let chosen = primary == Some(i);
            let role = if let Some(role) = fixed[i] {
                role
            } else if chosen {
                ColorRole::Primary
            } else if hsls[i].s > 0.4 {
                ColorRole::Accent
            } else {
                ColorRole::Secondary
            };
            RoleAssignment {
                color,
                role,
                is_primary: chosen,
            }
        })
        .collect()
}

/// The palette's single primary pick.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] for an empty palette. This
/// is the one contract in this crate that requires at least one color.
pub fn primary_color(palette: &[Rgb]) -> Result<Rgb, PaletteError> {
    assign_roles(palette)
        .into_iter()
        .find(|a| a.is_primary)
        .map(|a| a.color)
        .ok_or(PaletteError::EmptyPalette)
}

/// A coarse, human-readable classification of a color on its own.
///
/// Unlike [`assign_roles`] this looks at one color in isolation:
/// brightness and saturation buckets plus contrast against pure black
/// and white.
#[must_use]
pub fn describe_color(color: Rgb) -> &'static str {
    let hsl = color.to_hsl();

    let bright = hsl.l > 0.8;
    let dark = hsl.l < 0.2;
    let neutral = hsl.s < 0.15;
    let vibrant = hsl.s > 0.8;

    let reads_on_light = contrast_ratio(color, Rgb::WHITE) >= 4.5;
    let reads_on_dark = contrast_ratio(color, Rgb::BLACK) >= 4.5;

    if neutral {
        if bright {
            return "Background / Light Neutral";
        }
        if dark {
            return "Text / Dark Neutral";
        }
        return "Mid-tone Neutral";
    }

    if vibrant {
        if reads_on_light && reads_on_dark {
            return "Primary Action / Brand";
        }
        return "Accent / Highlight";
    }

    if bright {
        return "Light Shade / Background Variant";
    }
    if dark {
        return "Dark Shade / Text";
    }
    "Mid-tone / Secondary"
}

/// Concrete usage suggestions for a color given its assigned role.
#[must_use]
pub fn suggest_usage(color: Rgb, role: ColorRole) -> Vec<&'static str> {
    let reads_on_light = contrast_ratio(color, Rgb::WHITE) >= 4.5;
    let reads_on_dark = contrast_ratio(color, Rgb::BLACK) >= 4.5;

    let mut usage = Vec::new();
    match role {
        ColorRole::Primary => {
            usage.push("Main brand color");
            if reads_on_light {
                usage.push("Button text on light backgrounds");
            }
            if reads_on_dark {
                usage.push("Button text on dark backgrounds");
            }
        }
        ColorRole::Background => {
            usage.push("Page background");
            usage.push("Card background");
            if reads_on_dark {
                usage.push("Light mode container");
            }
        }
        ColorRole::Text => {
            if reads_on_light {
                usage.push("Text on light backgrounds");
            }
            if reads_on_dark {
                usage.push("Text on dark backgrounds");
            }
        }
        ColorRole::Accent => {
            usage.push("Links and interactive highlights");
            usage.push("Focus and selection states");
        }
        ColorRole::Secondary | ColorRole::Tertiary => {
            usage.push("Supporting UI elements");
            usage.push("Subdued buttons and chips");
        }
        ColorRole::Surface => {
            usage.push("Panels and cards");
        }
    }
    usage
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
