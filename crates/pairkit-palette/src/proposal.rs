//! External palette proposals.
//!
//! An AI collaborator proposes palettes as JSON:
//!
//! ```json
//! {
//!   "palettes": [
//!     {
//!       "colors": ["#0f172a", "#e2e8f0"],
//!       "name": "Slate Dawn",
//!       "reason": "Cool neutrals with a strong text/background split",
//!       "accessibility": { "wcag2": { "normal": 4.5, "large": 3.1 } }
//!     }
//!   ]
//! }
//! ```
//!
//! This module only *validates* such output: it parses the colors,
//! recomputes the contrast the palette can actually deliver, and checks
//! any accessibility numbers the proposer claimed. Generation lives
//! with the collaborator, never here.

use pairkit_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_ratio;
use crate::error::PaletteError;

/// The top-level proposal document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalDoc {
    pub palettes: Vec<PaletteProposal>,
}

/// One proposed palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteProposal {
    pub colors: Vec<String>,
    pub name: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityClaim>,
}

/// Accessibility numbers the proposer claims to have achieved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityClaim {
    pub wcag2: Wcag2Claim,
}

/// Claimed contrast ratios for normal and large text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wcag2Claim {
    pub normal: f64,
    pub large: f64,
}

/// The recomputed truth about one proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalReport {
    /// Colors that passed the hex boundary, in proposal order.
    pub colors: Vec<Rgb>,
    /// Strings rejected by the hex boundary, in proposal order.
    pub invalid: Vec<String>,
    /// The best pairwise contrast among the parsed colors.
    /// `None` when fewer than two colors parsed.
    pub best_pair_contrast: Option<f64>,
    /// Verification of the proposer's claim, when one was made and at
    /// least one pair exists to check it against.
    pub claim: Option<ClaimCheck>,
}

/// Whether the claimed ratios are actually reachable in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimCheck {
    pub normal_met: bool,
    pub large_met: bool,
}

impl PaletteProposal {
    /// Recompute what this proposal actually delivers.
    ///
    /// Invalid color strings are collected rather than failing the
    /// whole proposal; a proposal with fewer than two parseable colors
    /// produces an empty report rather than an error.
    #[must_use]
    pub fn check(&self) -> ProposalReport {
        let mut colors = Vec::new();
        let mut invalid = Vec::new();
        for raw in &self.colors {
            match Rgb::from_hex(raw) {
                Ok(color) => colors.push(color),
                Err(_) => invalid.push(raw.clone()),
            }
        }

        let mut best: Option<f64> = None;
        for (i, &a) in colors.iter().enumerate() {
            for &b in &colors[i + 1..] {
                let ratio = contrast_ratio(a, b);
                best = Some(best.map_or(ratio, |prev: f64| prev.max(ratio)));
            }
        }

        let claim = match (self.accessibility, best) {
            (Some(claimed), Some(best)) => Some(ClaimCheck {
                normal_met: best >= claimed.wcag2.normal,
                large_met: best >= claimed.wcag2.large,
            }),
            _ => None,
        };

        ProposalReport {
            colors,
            invalid,
            best_pair_contrast: best,
            claim,
        }
    }
}

/// Parse a proposal document from collaborator JSON.
///
/// # Errors
///
/// Returns [`PaletteError::Proposal`] when the document is not valid
/// JSON of the expected shape.
pub fn parse_proposals(json: &str) -> Result<ProposalDoc, PaletteError> {
    serde_json::from_str(json).map_err(|e| PaletteError::Proposal(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
