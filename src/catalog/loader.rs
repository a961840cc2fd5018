//! Catalog entry construction from pre-split tabular rows.
//!
//! The tabular collaborator hands over rows already split into fields; this
//! module never sees the raw format. Malformed rows are counted and skipped,
//! never fatal - a bad row costs one entry, not the catalog.

use log::warn;

use crate::models::CatalogEntry;

/// One pre-split row from the tabular catalog source.
///
/// All fields arrive as raw strings; validation happens here.
#[derive(Clone, Debug, Default)]
pub struct RawCatalogRow {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Result of a catalog load: usable entries plus the count of rows skipped
/// as malformed.
#[derive(Debug)]
pub struct LoadOutcome {
    pub entries: Vec<CatalogEntry>,
    pub skipped: usize,
}

/// Build catalog entries from raw rows.
///
/// A row needs a positive numeric id and a non-empty name; anything else is
/// skipped and counted. An icon id of 0, missing, or non-numeric just means
/// no icon - the entry still loads.
pub fn load_entries(rows: impl IntoIterator<Item = RawCatalogRow>) -> LoadOutcome {
    let mut entries = Vec::new();
    let mut skipped = 0;

    for row in rows {
        let id = match row.id.trim().parse::<u32>() {
            Ok(id) if id > 0 => id,
            _ => {
                warn!("Skipping catalog row with unusable id {:?}", row.id);
                skipped += 1;
                continue;
            }
        };

        let name = row.name.trim();
        if name.is_empty() {
            warn!("Skipping catalog row {} with empty name", id);
            skipped += 1;
            continue;
        }

        let mut entry = CatalogEntry::new(id, name);
        if let Ok(icon_id) = row.icon.trim().parse::<u32>() {
            if icon_id > 0 {
                entry = entry.with_icon(icon_path(icon_id));
            }
        }
        entries.push(entry);
    }

    if skipped > 0 {
        warn!("Catalog load skipped {} malformed rows", skipped);
    }

    LoadOutcome { entries, skipped }
}

/// Derive the icon path for a numeric icon id.
///
/// The id is zero-padded to six digits; the bucket folder keeps the first
/// three digits and zeroes the rest: 26557 -> `/i/026000/026557.png`.
fn icon_path(icon_id: u32) -> String {
    let padded = format!("{:06}", icon_id);
    format!("/i/{}000/{}.png", &padded[..3], padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, icon: &str) -> RawCatalogRow {
        RawCatalogRow {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }

    #[test]
    fn test_icon_path_buckets() {
        assert_eq!(icon_path(26557), "/i/026000/026557.png");
        assert_eq!(icon_path(845), "/i/000000/000845.png");
        assert_eq!(icon_path(120001), "/i/120000/120001.png");
    }

    #[test]
    fn test_load_entries_with_icons() {
        let outcome = load_entries(vec![row("4551", "Iron Longsword", "26557")]);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(
            outcome.entries[0].icon_path.as_deref(),
            Some("/i/026000/026557.png")
        );
    }

    #[test]
    fn test_unusable_icon_loads_without_icon() {
        let outcome = load_entries(vec![
            row("1", "No Icon", "0"),
            row("2", "Blank Icon", ""),
            row("3", "Bad Icon", "n/a"),
        ]);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.entries.len(), 3);
        assert!(outcome.entries.iter().all(|e| e.icon_path.is_none()));
    }

    #[test]
    fn test_malformed_rows_are_counted_and_skipped() {
        let outcome = load_entries(vec![
            row("4551", "Iron Longsword", "26557"),
            row("0", "Zero Id", ""),
            row("abc", "Bad Id", ""),
            row("7", "   ", ""),
        ]);
        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].id, 4551);
    }
}
