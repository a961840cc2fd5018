use serde::{Deserialize, Serialize};

/// Canonical catalog record for a tradable item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Numeric item identifier (positive, unique)
    pub id: u32,

    /// Canonical display name
    pub name: String,

    /// Icon path, when the source row carried a usable icon id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
}

impl CatalogEntry {
    /// Create an entry without an icon.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon_path: None,
        }
    }

    /// Set the icon path.
    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.icon_path = Some(path.into());
        self
    }

    /// Lowercase form of the name, used as the index key.
    pub fn normalized_name(&self) -> String {
        self.name.to_lowercase()
    }
}
