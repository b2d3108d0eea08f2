// SPDX-License-Identifier: MIT
//
// pairkit-color: color value types and color-space conversion.
//
// The foundation layer for palette analysis: a 24-bit RGB value type with
// a strict hex parsing boundary, plus the cylindrical HSL/HSV views used
// by harmony generation and interactive pickers.
//
// Conventions (enforced, not advisory):
//
//   hex    6 hex digits, optional leading '#', case-insensitive input,
//          lowercase canonical output
//   hue    degrees in [0, 360)
//   s/l/v  fractions in [0, 1]
//
// Everything here is pure and synchronous. Parsing failures surface as
// `ColorError` at the boundary; downstream math never sees a malformed
// color.

// Single-character variable names (r, g, b, h, s, l, v) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod error;
pub mod hsl;
pub mod hsv;
pub mod rgb;

pub use error::ColorError;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
