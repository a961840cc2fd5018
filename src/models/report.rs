use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FailureKind;

use super::shard::Shard;

/// Marker describing why a shard carries no data in a fallback report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardFailure {
    /// What went wrong
    pub kind: FailureKind,

    /// Human-readable detail for logs and diagnostics
    pub message: String,
}

/// Per-shard slice of an aggregated price report.
///
/// `min_price_*` is the minimum asking price among active listings of that
/// quality; a shard with no listings of a quality carries `None` there,
/// never zero. A present `failure` means the shard's query failed outright -
/// distinct from a shard that answered with zero listings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardQuoteSummary {
    pub shard_id: u32,

    pub display_name: String,

    /// Number of active listings on this shard, any quality
    pub listing_count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price_standard: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price_high_quality: Option<Decimal>,

    /// When this shard's data was last uploaded to the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_upload: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ShardFailure>,
}

impl ShardQuoteSummary {
    /// Summary for a shard that answered with no listings.
    pub fn empty(shard: &Shard) -> Self {
        Self {
            shard_id: shard.id,
            display_name: shard.name.clone(),
            listing_count: 0,
            min_price_standard: None,
            min_price_high_quality: None,
            last_upload: None,
            failure: None,
        }
    }

    /// Summary for a shard whose query failed.
    pub fn failed(shard: &Shard, failure: ShardFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::empty(shard)
        }
    }

    /// True when either quality carries a price.
    pub fn has_price(&self) -> bool {
        self.min_price_standard.is_some() || self.min_price_high_quality.is_some()
    }
}

/// Which path produced a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    /// Single unified multi-shard call
    Unified,

    /// Independent per-shard calls after the unified call failed
    Fallback,
}

/// Consolidated price report for one item across a region.
///
/// `per_shard` always follows the region's declared shard order. The
/// recent-trade minima come from realized sales across the whole region and
/// are only available on the unified path.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceReport {
    pub per_shard: Vec<ShardQuoteSummary>,

    pub recent_min_standard: Option<Decimal>,

    pub recent_min_high_quality: Option<Decimal>,

    pub source: ReportSource,
}
