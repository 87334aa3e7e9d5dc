//! Curated compound knowledge base and lookup policy.
//!
//! The knowledge base is an ordered list of `(key, entry)` pairs scanned
//! front to back; the first key that is a case-insensitive substring of the
//! product's display name wins. Declaration order is the tie-break: several
//! keys can be substrings of one name (a kit named after a GLP compound, for
//! instance), and reordering the table changes which entry such a name
//! resolves to. Do not replace the list with a map.
//!
//! When no key matches, [`KnowledgeBase::lookup`] returns a generic fallback
//! entry whose descriptive fields reference the product name instead of
//! compound-specific chemistry. Lookup never fails.

mod entries;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Curated reference data for one recognized compound (or the generic
/// fallback). Every field has usable content; the renderer never needs a
/// per-field default on top of this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseEntry {
    /// Compound class, e.g. `"gastric pentadecapeptide"`.
    pub compound_class: String,
    /// One-paragraph overview.
    pub overview: String,
    /// Multi-paragraph scientific background.
    pub scientific_background: String,
    /// Research application bullet items.
    pub research_applications: Vec<String>,
    pub molecular_formula: String,
    pub molecular_weight: String,
    pub cas_number: String,
    pub sequence: String,
    pub reconstitution_concentration: String,
    pub stability_lyophilized: String,
    pub stability_reconstituted: String,
    pub stability_working: String,
    /// Related-compound bullet items.
    pub related_compounds: Vec<String>,
    /// SEO keyword fragments.
    pub keywords: Vec<String>,
}

/// The compound knowledge base: an ordered match table plus the fallback.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<(String, KnowledgeBaseEntry)>,
}

impl KnowledgeBase {
    /// Build the knowledge base from the curated embedded table.
    pub fn curated() -> Self {
        Self {
            entries: entries::curated_entries(),
        }
    }

    /// Build a knowledge base from an explicit ordered table (for loading
    /// externally maintained reference data).
    pub fn from_entries(entries: Vec<(String, KnowledgeBaseEntry)>) -> Self {
        Self { entries }
    }

    /// Number of curated entries (excluding the fallback).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a display name to a reference entry.
    ///
    /// First key (in declaration order) that is a case-insensitive substring
    /// of `display_name` wins; otherwise the generic fallback for that name.
    pub fn lookup(&self, display_name: &str) -> KnowledgeBaseEntry {
        let haystack = display_name.to_lowercase();

        for (key, entry) in &self.entries {
            if haystack.contains(&key.to_lowercase()) {
                debug!(name = display_name, key, "knowledge base match");
                return entry.clone();
            }
        }

        debug!(name = display_name, "no knowledge base match, using fallback");
        entries::fallback_for(display_name)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::curated()
    }
}
