use pairkit_color::ColorError;
use thiserror::Error;

/// Errors surfaced by palette-level operations.
///
/// Everything here is recoverable by the caller. Empty collections are
/// not errors anywhere in this crate (they produce empty output), so
/// [`PaletteError::EmptyPalette`] only appears on the few contracts
/// that explicitly require at least one usable color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A color string failed parsing or validation.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The operation requires at least one usable color.
    #[error("palette requires at least one color")]
    EmptyPalette,

    /// An external palette proposal document could not be parsed.
    #[error("malformed palette proposal: {0}")]
    Proposal(String),
}
