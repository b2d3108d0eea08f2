//! The explicit session cache for catalog records.
//!
//! Callers that talk to the font-directory collaborator own one of
//! these instead of module-level globals. Eviction policy: none. The
//! catalog is append-only for the session, and the first record seen
//! for a family wins.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::category::FontRecord;
use crate::error::FontError;

/// An append-only, per-session font catalog keyed by family name.
///
/// Also tracks which families the caller has marked as loaded (the
/// replacement for a global loaded-fonts set); pairkit itself never
/// loads anything.
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    records: BTreeMap<String, FontRecord>,
    loaded: BTreeSet<String>,
}

/// Wire shape of a catalog dump: `{"items": [FontRecord, ...]}`.
#[derive(Debug, Deserialize)]
struct CatalogDump {
    #[serde(default)]
    items: Vec<FontRecord>,
}

impl FontCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a collaborator catalog dump.
    ///
    /// Duplicate families inside the dump follow the append-only rule:
    /// the first record wins.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Catalog`] when the dump is not valid JSON
    /// of the expected shape.
    pub fn from_json(json: &str) -> Result<Self, FontError> {
        let dump: CatalogDump =
            serde_json::from_str(json).map_err(|e| FontError::Catalog(e.to_string()))?;
        let mut catalog = Self::new();
        for record in dump.items {
            catalog.insert(record);
        }
        Ok(catalog)
    }

    /// Insert a record. Returns `true` when the family was new;
    /// an existing entry is kept untouched (append-only).
    pub fn insert(&mut self, record: FontRecord) -> bool {
        if self.records.contains_key(&record.family) {
            #[cfg(feature = "tracing")]
            tracing::debug!(family = %record.family, "catalog already has family, keeping existing record");
            return false;
        }
        self.records.insert(record.family.clone(), record);
        true
    }

    #[must_use]
    pub fn get(&self, family: &str) -> Option<&FontRecord> {
        self.records.get(family)
    }

    /// Mark a family as loaded by the platform layer.
    pub fn mark_loaded(&mut self, family: &str) {
        self.loaded.insert(family.to_owned());
    }

    #[must_use]
    pub fn is_loaded(&self, family: &str) -> bool {
        self.loaded.contains(family)
    }

    /// Family names in sorted order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All records, sorted by family.
    pub fn records(&self) -> impl Iterator<Item = &FontRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
