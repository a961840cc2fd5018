//! Tiered text resolution over the catalog index.
//!
//! Resolution is a two-step affair: an exact lookup on the normalized name,
//! then a single linear scan that ranks every partial match. The scan
//! classifies each entry into exactly one tier - suffix match, prefix match,
//! then plain substring - and orders matches by a composite key of
//! (tier, name length, id). Shorter names rank first within a tier because
//! they are closer to the query; ids break the remaining ties
//! deterministically.
//!
//! A query that matches nothing is a normal outcome, not an error: the
//! caller may hand the text to an external search fallback.
//!
//! The scan is O(catalog size) per query, which is fine for catalogs in the
//! tens of thousands at chat-command call volume. A suffix index could
//! replace it at larger scale as long as the tier semantics stay intact.

use std::sync::Arc;

use crate::catalog::CatalogIndex;
use crate::models::CatalogEntry;

/// Maximum number of alternate matches returned alongside the primary.
pub const MAX_ALTERNATES: usize = 10;

/// Outcome of a text resolution.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    /// Best match, or `None` when nothing in the catalog matches
    pub primary: Option<CatalogEntry>,

    /// Up to [`MAX_ALTERNATES`] runner-up matches, best first
    pub alternates: Vec<CatalogEntry>,
}

impl Resolution {
    /// True when the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }
}

/// Resolves free-text queries against an immutable catalog index.
///
/// Holds a shared handle to the index; cloning the resolver is cheap and
/// resolutions are safe to run concurrently.
#[derive(Clone)]
pub struct TextResolver {
    index: Arc<CatalogIndex>,
}

impl TextResolver {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// Resolve a free-text query to catalog entries.
    pub fn resolve(&self, query: &str) -> Resolution {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Resolution::default();
        }

        // Exact hit on the normalized name short-circuits the scan.
        if let Some(entry) = self.index.get(&query) {
            return Resolution {
                primary: Some(entry.clone()),
                alternates: Vec::new(),
            };
        }

        let mut matches: Vec<(u8, usize, u32, &CatalogEntry)> = Vec::new();
        for entry in self.index.entries() {
            let name = entry.normalized_name();
            if let Some(tier) = match_tier(&name, &query) {
                matches.push((tier, name.len(), entry.id, entry));
            }
        }
        matches.sort_by_key(|&(tier, len, id, _)| (tier, len, id));

        let mut ranked = matches.into_iter().map(|(_, _, _, entry)| entry.clone());
        let primary = ranked.next();
        let alternates: Vec<CatalogEntry> = ranked.take(MAX_ALTERNATES).collect();

        Resolution {
            primary,
            alternates,
        }
    }

    /// Look up an entry by numeric id, for id-based queries.
    pub fn entry_by_id(&self, id: u32) -> Option<CatalogEntry> {
        self.index.get_by_id(id).cloned()
    }
}

/// Classify a name into exactly one match tier; the first matching tier
/// wins. Lower is better.
fn match_tier(name: &str, query: &str) -> Option<u8> {
    if ends_within_word(name, query) {
        Some(0)
    } else if name.starts_with(query) {
        Some(1)
    } else if name.contains(query) {
        Some(2)
    } else {
        None
    }
}

/// Suffix-tier test: the name ends with the query and the match extends a
/// longer final word ("spot" for query "pot"). A trailing word that merely
/// equals the query ("hot pot") stays in the substring tier.
fn ends_within_word(name: &str, query: &str) -> bool {
    if !name.ends_with(query) {
        return false;
    }
    // Full equality is the exact-match path's job, not a tier.
    let boundary = name.len() - query.len();
    boundary > 0 && !name.as_bytes()[..boundary].ends_with(b" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(entries: Vec<CatalogEntry>) -> TextResolver {
        TextResolver::new(Arc::new(CatalogIndex::new(entries)))
    }

    fn names(resolution: &Resolution) -> Vec<String> {
        resolution
            .primary
            .iter()
            .chain(resolution.alternates.iter())
            .map(|e| e.name.clone())
            .collect()
    }

    #[test]
    fn test_exact_match_short_circuits_any_case() {
        let r = resolver(vec![
            CatalogEntry::new(1, "Pot"),
            CatalogEntry::new(2, "Spot"),
            CatalogEntry::new(3, "Pottery"),
        ]);
        let resolution = r.resolve("POT");
        assert_eq!(resolution.primary.unwrap().id, 1);
        assert!(resolution.alternates.is_empty());
    }

    #[test]
    fn test_tier_exclusivity_and_ordering() {
        let r = resolver(vec![
            CatalogEntry::new(1, "Spot"),
            CatalogEntry::new(2, "Pottery"),
            CatalogEntry::new(3, "Hot Pot"),
        ]);
        let resolution = r.resolve("pot");
        assert_eq!(names(&resolution), vec!["Spot", "Pottery", "Hot Pot"]);
    }

    #[test]
    fn test_shorter_names_rank_first_within_tier() {
        let r = resolver(vec![
            CatalogEntry::new(1, "Potion of Strength"),
            CatalogEntry::new(2, "Potion"),
        ]);
        let resolution = r.resolve("poti");
        assert_eq!(names(&resolution), vec!["Potion", "Potion of Strength"]);
    }

    #[test]
    fn test_equal_length_ties_break_by_ascending_id() {
        let r = resolver(vec![
            CatalogEntry::new(20, "Potash"),
            CatalogEntry::new(10, "Potato"),
        ]);
        let resolution = r.resolve("pota");
        assert_eq!(resolution.primary.unwrap().id, 10);
        assert_eq!(resolution.alternates[0].id, 20);
    }

    #[test]
    fn test_alternates_cap_at_ten() {
        let entries = (1..=15)
            .map(|i| CatalogEntry::new(i, format!("Potion Variant {:02}", i)))
            .collect();
        let resolution = resolver(entries).resolve("potion v");
        assert!(resolution.primary.is_some());
        assert_eq!(resolution.alternates.len(), MAX_ALTERNATES);
    }

    #[test]
    fn test_no_match_is_empty_resolution() {
        let r = resolver(vec![CatalogEntry::new(1, "Iron Longsword")]);
        let resolution = r.resolve("chocobo");
        assert!(resolution.is_empty());
        assert!(resolution.alternates.is_empty());
    }

    #[test]
    fn test_degraded_index_always_resolves_empty() {
        let r = TextResolver::new(Arc::new(CatalogIndex::empty()));
        assert!(r.resolve("anything").is_empty());
        assert!(r.resolve("pot").is_empty());
        assert!(r.entry_by_id(4551).is_none());
    }

    #[test]
    fn test_entry_by_id_survives_name_collisions() {
        let r = resolver(vec![
            CatalogEntry::new(100, "Mythril Ore"),
            CatalogEntry::new(200, "MYTHRIL ORE"),
        ]);
        assert_eq!(r.entry_by_id(100).unwrap().id, 100);
    }
}
