// SPDX-License-Identifier: MIT
//
// Error type for the color parsing and validation boundary.

use thiserror::Error;

/// Errors produced when a color value fails parsing or validation.
///
/// All variants are local and recoverable. Downstream palette and font
/// functions only ever operate on values that already passed this
/// boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input is not a 6-hex-digit color string.
    ///
    /// Accepted shape: exactly six hex digits with an optional leading
    /// `#`. Shorthand (`#abc`) and alpha (`#rrggbbaa`) forms are
    /// rejected here so that every caller shares one canonical format.
    #[error("invalid hex color {0:?}: expected 6 hex digits with optional leading '#'")]
    InvalidFormat(String),

    /// A component was outside its documented unit range.
    #[error("{component} = {value} is outside {range}")]
    InvalidRange {
        component: &'static str,
        value: f64,
        /// The documented range, e.g. `"[0, 360)"` or `"[0, 1]"`.
        range: &'static str,
    },
}
