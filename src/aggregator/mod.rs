//! Two-stage price aggregation across a region's shards.
//!
//! Stage one is a single unified call covering the whole region; its typed
//! result gates stage two. Any failure there - timeout, transport, malformed
//! payload - degrades to independent per-shard queries, a plain
//! scatter/gather where one shard's failure is captured on that shard's
//! summary and never touches the others. Either way the caller gets a
//! report; aggregation itself is infallible.
//!
//! Minima are always minima. Nothing in here averages.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::models::{
    timestamp_from_millis, Listing, PriceReport, Region, ReportSource, SaleRecord, Shard,
    ShardFailure, ShardPayload, ShardQuoteSummary, UnifiedPayload,
};
use crate::provider::{ShardPriceSource, UnifiedPriceSource};

/// Aggregates current listings for one item across every shard of a region.
pub struct PriceAggregator {
    unified: Arc<dyn UnifiedPriceSource>,
    shard_source: Arc<dyn ShardPriceSource>,
    region: Region,
}

impl PriceAggregator {
    pub fn new(
        unified: Arc<dyn UnifiedPriceSource>,
        shard_source: Arc<dyn ShardPriceSource>,
        region: Region,
    ) -> Self {
        Self {
            unified,
            shard_source,
            region,
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Fetch a consolidated price report for an item.
    ///
    /// The unified source is attempted exactly once; on failure the
    /// per-shard fallback takes over. A report is always produced, even when
    /// every shard failed.
    pub async fn fetch_report(&self, item_id: u32) -> PriceReport {
        match self.unified.fetch_region(&self.region.code, item_id).await {
            Ok(payload) => {
                debug!(
                    "Unified price query for item {} returned {} listings",
                    item_id,
                    payload.listings.len()
                );
                self.decompose_unified(payload)
            }
            Err(e) => {
                warn!(
                    "Unified price query failed for item {}: {}; falling back to per-shard queries",
                    item_id, e
                );
                self.gather_per_shard(item_id).await
            }
        }
    }

    /// Split a unified payload into per-shard summaries plus region-wide
    /// recent-trade minima.
    fn decompose_unified(&self, payload: UnifiedPayload) -> PriceReport {
        let per_shard = self
            .region
            .shards
            .iter()
            .map(|shard| {
                let listings: Vec<&Listing> = payload
                    .listings
                    .iter()
                    .filter(|l| l.shard_id == shard.id)
                    .collect();

                ShardQuoteSummary {
                    shard_id: shard.id,
                    display_name: shard.name.clone(),
                    listing_count: listings.len(),
                    min_price_standard: min_price(listings.iter().copied(), false),
                    min_price_high_quality: min_price(listings.iter().copied(), true),
                    last_upload: payload
                        .upload_times
                        .get(&shard.id)
                        .copied()
                        .and_then(timestamp_from_millis),
                    failure: None,
                }
            })
            .collect();

        PriceReport {
            per_shard,
            recent_min_standard: recent_min(&payload.recent_history, false),
            recent_min_high_quality: recent_min(&payload.recent_history, true),
            source: ReportSource::Unified,
        }
    }

    /// Fallback scatter/gather: one independent query per shard, failures
    /// isolated to their shard, output in declared shard order.
    ///
    /// No recent-trade data exists in this mode; only the unified source
    /// carries it.
    async fn gather_per_shard(&self, item_id: u32) -> PriceReport {
        let calls = self
            .region
            .shards
            .iter()
            .map(|shard| self.shard_source.fetch_shard(shard, item_id));
        let outcomes = join_all(calls).await;

        let per_shard = self
            .region
            .shards
            .iter()
            .zip(outcomes)
            .map(|(shard, outcome)| match outcome {
                Ok(payload) => shard_summary(shard, payload),
                Err(e) => {
                    warn!(
                        "Shard query for {} failed (item {}): {}",
                        shard.name, item_id, e
                    );
                    ShardQuoteSummary::failed(
                        shard,
                        ShardFailure {
                            kind: e.failure_kind(),
                            message: e.to_string(),
                        },
                    )
                }
            })
            .collect();

        PriceReport {
            per_shard,
            recent_min_standard: None,
            recent_min_high_quality: None,
            source: ReportSource::Fallback,
        }
    }
}

/// Summary for one shard from its own payload.
fn shard_summary(shard: &Shard, payload: ShardPayload) -> ShardQuoteSummary {
    ShardQuoteSummary {
        shard_id: shard.id,
        display_name: shard.name.clone(),
        listing_count: payload.listings.len(),
        min_price_standard: min_price(payload.listings.iter(), false),
        min_price_high_quality: min_price(payload.listings.iter(), true),
        last_upload: payload.last_upload_time.and_then(timestamp_from_millis),
        failure: None,
    }
}

/// Minimum asking price among listings of one quality. An empty set means
/// no price, never zero.
fn min_price<'a>(
    listings: impl Iterator<Item = &'a Listing>,
    high_quality: bool,
) -> Option<Decimal> {
    listings
        .filter(|l| l.high_quality == high_quality)
        .map(|l| l.price_per_unit)
        .min()
}

/// Minimum realized price among recent sales of one quality.
fn recent_min(history: &[SaleRecord], high_quality: bool) -> Option<Decimal> {
    history
        .iter()
        .filter(|s| s.high_quality == high_quality)
        .map(|s| s.price_per_unit)
        .min()
}
