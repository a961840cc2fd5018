//! Price source trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Shard, ShardPayload, UnifiedPayload};

/// A price source that returns data for every shard of a region in one call.
///
/// Implementations must map a "not found" answer from the source to an empty
/// payload: an unknown item is a valid empty result, never an error. Exactly
/// one attempt per call - the aggregator degrades to per-shard queries on
/// failure instead of retrying.
#[async_trait]
pub trait UnifiedPriceSource: Send + Sync {
    /// Fetch listings, recent sale history, and upload times for all shards
    /// of a region.
    async fn fetch_region(
        &self,
        region_code: &str,
        item_id: u32,
    ) -> Result<UnifiedPayload, MarketDataError>;
}

/// A price source scoped to a single shard.
///
/// Same "not found" contract as [`UnifiedPriceSource`]. Calls to different
/// shards are independent; a failure on one carries no meaning for another.
#[async_trait]
pub trait ShardPriceSource: Send + Sync {
    /// Fetch listings for one shard.
    async fn fetch_shard(
        &self,
        shard: &Shard,
        item_id: u32,
    ) -> Result<ShardPayload, MarketDataError>;
}
