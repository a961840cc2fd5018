//! Immutable catalog index.
//!
//! The index is built once at startup from the entry list the catalog loader
//! supplies, and is read-only afterwards. It is shared behind an `Arc` and
//! safe for unbounded concurrent reads; nothing mutates it after
//! construction.

mod loader;

pub use loader::{load_entries, LoadOutcome, RawCatalogRow};

use std::collections::HashMap;

use crate::models::CatalogEntry;

/// Read-only name index over the item catalog.
///
/// Lookups key on the lowercase-normalized name. When two entries normalize
/// to the same key, the last-loaded one wins, matching the row order of the
/// source data.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    by_name: HashMap<String, CatalogEntry>,
    by_id: HashMap<u32, CatalogEntry>,
}

impl CatalogIndex {
    /// Build the index from an ordered entry list.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            by_name.insert(entry.normalized_name(), entry.clone());
            by_id.insert(entry.id, entry);
        }
        Self { by_name, by_id }
    }

    /// Index with no entries.
    ///
    /// Used when the catalog failed to load at startup: text resolution then
    /// always comes up empty, while id-based aggregation keeps working.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up an entry by its lowercase-normalized name.
    pub fn get(&self, normalized_name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(normalized_name)
    }

    /// Look up an entry by numeric id.
    pub fn get_by_id(&self, id: u32) -> Option<&CatalogEntry> {
        self.by_id.get(&id)
    }

    /// Iterate over every indexed entry, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
