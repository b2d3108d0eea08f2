// SPDX-License-Identifier: MIT
//
// pairkit: font pairing and color palette analysis engine.
//
// This facade wires together the workspace members:
//
//   pairkit-color   → color value types, the hex parsing boundary,
//                     HSL/HSV conversion
//   pairkit-palette → WCAG contrast math, accessible variants, harmony,
//                     role assignment, whole-palette analysis, proposal
//                     validation
//   pairkit-font    → font categories, pairing heuristics, the session
//                     catalog cache
//
// The crate has no I/O surface of its own. Callers (a UI layer, an AI
// palette collaborator, a font-catalog collaborator) push values
// through the function-call boundary:
//
//   user input → Rgb::from_hex → contrast / roles / harmony → view
//   catalog JSON → FontCatalog → generate_pairing(rng) → view
//   proposal JSON → parse_proposals → PaletteProposal::check → view

pub use pairkit_color as color;
pub use pairkit_font as font;
pub use pairkit_palette as palette;

pub use pairkit_color::{ColorError, Hsl, Hsv, Rgb};
pub use pairkit_font::{
    FontCatalog, FontCategory, FontPairing, FontRecord, FontRef, Xorshift32, font_contrast,
    generate_pairing,
};
pub use pairkit_palette::{
    ColorAnalysis, ColorHarmony, ColorRole, PaletteError, Severity, SuggestedPair, WcagStatus,
    assign_roles, contrast_ratio, contrast_ratio_hex, find_accessible_variant, relative_luminance,
    suggested_pairs,
};

// ─── Cross-crate scenario tests ─────────────────────────────────────────────
