//! # pairkit-palette: contrast engine and palette heuristics
//!
//! The scoring half of pairkit: WCAG contrast math, bounded
//! accessible-variant search, harmony generation, role assignment, and
//! whole-palette analysis, plus validation of externally proposed
//! palettes.
//!
//! # Architecture
//!
//! ```text
//! contrast.rs:  relative luminance, contrast ratio, WCAG thresholds
//!     │
//!     ▼
//! variant.rs:   walk a color toward black/white until readable
//! harmony.rs:   fixed hue rotations via the HSL round-trip
//!     │
//!     ▼
//! role.rs:      prominence scoring and deterministic role assignment
//!     │
//!     ▼
//! analysis.rs:  per-color profiles, pair recommendations, enhancements
//! proposal.rs:  recompute the claims of collaborator-proposed palettes
//! ```
//!
//! Every function is pure and synchronous. Empty inputs produce empty
//! outputs; malformed colors are stopped at the `pairkit-color` parsing
//! boundary and surface as [`PaletteError`].

// Mathematical code uses small integer-to-float casts (loop indices,
// palette sizes).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod analysis;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod proposal;
pub mod role;
pub mod variant;

pub use analysis::{
    ColorAnalysis, ContrastIssue, Enhancement, EnhancementKind, PairRecommendation,
    analyze_palette, enhancements, recommend_pairs,
};
pub use contrast::{Severity, WcagStatus, contrast_ratio, contrast_ratio_hex, relative_luminance};
pub use error::PaletteError;
pub use harmony::ColorHarmony;
pub use proposal::{PaletteProposal, ProposalDoc, ProposalReport, parse_proposals};
pub use role::{ColorRole, RoleAssignment, assign_roles, primary_color, prominence_score};
pub use variant::{SuggestedPair, find_accessible_variant, suggested_pairs};
