//! Font categories and catalog record types.
//!
//! The font catalog is an external collaborator; it supplies records
//! shaped like `{family, category, subsets, variants, files}`. The
//! numeric core only ever needs the family name and the coarse
//! category, so everything else stays optional wire baggage.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of coarse typographic classifications.
///
/// Catalog categories outside this set collapse to `SansSerif`; the
/// pairing heuristics only reason about these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontCategory {
    Serif,
    SansSerif,
    Display,
    Handwriting,
    Monospace,
}

impl FontCategory {
    /// The wire name of this category (`"sans-serif"` etc.).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Display => "display",
            Self::Handwriting => "handwriting",
            Self::Monospace => "monospace",
        }
    }

    /// Map a collaborator category string onto the closed set
    /// (case-insensitive). Anything unrecognized defaults to
    /// `SansSerif`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "serif" => Self::Serif,
            "display" => Self::Display,
            "handwriting" => Self::Handwriting,
            "monospace" => Self::Monospace,
            _ => Self::SansSerif,
        }
    }

    /// All category values.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Serif,
            Self::SansSerif,
            Self::Display,
            Self::Handwriting,
            Self::Monospace,
        ]
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One catalog record as supplied by the font-directory collaborator.
///
/// `category` keeps the raw wire string; [`FontRecord::categorize`]
/// maps it onto the closed [`FontCategory`] set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontRecord {
    pub family: String,
    pub category: String,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<BTreeMap<String, String>>,
}

impl FontRecord {
    /// Convenience constructor for records built in process.
    #[must_use]
    pub fn new(family: impl Into<String>, category: FontCategory) -> Self {
        Self {
            family: family.into(),
            category: category.name().to_owned(),
            subsets: vec!["latin".to_owned()],
            variants: Vec::new(),
            files: None,
        }
    }

    /// The record's category mapped onto the closed set.
    #[must_use]
    pub fn categorize(&self) -> FontCategory {
        FontCategory::parse(&self.category)
    }

    /// Whether the font covers the latin subset (the compatibility
    /// baseline the pairing generator filters on).
    #[must_use]
    pub fn has_latin(&self) -> bool {
        self.subsets.iter().any(|s| s == "latin")
    }
}

/// A reference to a font, with or without a live platform handle.
///
/// The numeric core only ever reads the family name; the handle is an
/// opaque token owned by whatever loaded the font.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontRef {
    /// A font known only by name.
    Named(String),
    /// A font that has been loaded by the platform layer.
    Loaded { family: String, handle: u64 },
}

impl FontRef {
    /// The family name, regardless of load state.
    #[must_use]
    pub fn family(&self) -> &str {
        match self {
            Self::Named(family) | Self::Loaded { family, .. } => family,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_round_trip() {
        for category in FontCategory::all() {
            assert_eq!(FontCategory::parse(category.name()), *category);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(FontCategory::parse("Serif"), FontCategory::Serif);
        assert_eq!(FontCategory::parse("MONOSPACE"), FontCategory::Monospace);
    }

    #[test]
    fn unrecognized_defaults_to_sans_serif() {
        assert_eq!(FontCategory::parse("blackletter"), FontCategory::SansSerif);
        assert_eq!(FontCategory::parse(""), FontCategory::SansSerif);
    }

    #[test]
    fn record_categorize_uses_wire_string() {
        let record = FontRecord {
            family: "Lora".into(),
            category: "SERIF".into(),
            subsets: Vec::new(),
            variants: Vec::new(),
            files: None,
        };
        assert_eq!(record.categorize(), FontCategory::Serif);
    }

    #[test]
    fn record_deserializes_minimal_wire_shape() {
        let record: FontRecord =
            serde_json::from_str(r#"{"family": "Inter", "category": "sans-serif"}"#).unwrap();
        assert_eq!(record.family, "Inter");
        assert!(record.subsets.is_empty());
        assert!(!record.has_latin());
    }

    #[test]
    fn new_records_carry_latin() {
        let record = FontRecord::new("Inter", FontCategory::SansSerif);
        assert!(record.has_latin());
    }

    #[test]
    fn font_ref_family() {
        assert_eq!(FontRef::Named("Lora".into()).family(), "Lora");
        let loaded = FontRef::Loaded {
            family: "Inter".into(),
            handle: 7,
        };
        assert_eq!(loaded.family(), "Inter");
    }
}
