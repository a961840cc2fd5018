use serde::{Deserialize, Serialize};

/// One regional trading-post shard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shard {
    /// Numeric shard identifier used by the price sources
    pub id: u32,

    /// Display name
    pub name: String,
}

impl Shard {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A logical region: the fixed, ordered set of shards served by one unified
/// price endpoint.
///
/// The shard order declared here is the order every report follows,
/// regardless of which shard answers first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Region code used by the unified endpoint
    pub code: String,

    /// Declared shard list, in report order
    pub shards: Vec<Shard>,
}

impl Region {
    pub fn new(code: impl Into<String>, shards: Vec<Shard>) -> Self {
        Self {
            code: code.into(),
            shards,
        }
    }
}

impl Default for Region {
    /// The built-in five-shard region.
    fn default() -> Self {
        Region::new(
            "meridian",
            vec![
                Shard::new(401, "Aldenmoor"),
                Shard::new(402, "Brightstone"),
                Shard::new(403, "Caldera"),
                Shard::new(404, "Duskwatch"),
                Shard::new(405, "Emberfall"),
            ],
        )
    }
}
