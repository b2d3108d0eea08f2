//! # pairkit-font: font categories and pairing heuristics
//!
//! The typographic half of pairkit: the closed category set, catalog
//! record types, the 0–100 pairing-contrast heuristic, and the
//! append-only session catalog.
//!
//! # Architecture
//!
//! ```text
//! category.rs: FontCategory, FontRecord (wire shape), FontRef
//!     │
//!     ▼
//! pairing.rs:  rule tables, jittered contrast score, body matching,
//!              full pairing generation
//!
//! rng.rs:      the injected Xorshift32 all jitter flows through
//! catalog.rs:  explicit per-session cache of catalog records
//! ```
//!
//! All variety is driven by a caller-supplied [`Xorshift32`]; with a
//! fixed seed every function in this crate is deterministic.

pub mod catalog;
pub mod category;
pub mod error;
pub mod pairing;
pub mod rng;

pub use catalog::FontCatalog;
pub use category::{FontCategory, FontRecord, FontRef};
pub use error::FontError;
pub use pairing::{
    FontPairing, find_matching_body_font, font_contrast, font_contrast_categories,
    generate_pairing, is_recommended_combination,
};
pub use rng::Xorshift32;
