//! Derived report summary for the presentation collaborator.
//!
//! A pure transform over a finished [`PriceReport`]: overall minima across
//! shards, one "is cheapest" flag per shard, and a whole-report no-data flag
//! so the caller renders a single empty state instead of five independent
//! blanks. This is the only shape the presentation side consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PriceReport;

/// Per-shard highlight flag, aligned with the report's shard order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardHighlight {
    pub shard_id: u32,

    /// True when this shard carries an overall-minimum price
    pub is_cheapest: bool,
}

/// Overall minima and highlight flags derived from a report.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Minimum standard-quality price across all shards that have one
    pub overall_min_standard: Option<Decimal>,

    /// Minimum high-quality price across all shards that have one
    pub overall_min_high_quality: Option<Decimal>,

    /// One entry per shard, in report order
    pub highlights: Vec<ShardHighlight>,

    /// True when no shard carries any price at all
    pub no_data: bool,
}

/// Derive overall minima and cheapest-shard flags from a report.
///
/// A shard is cheapest when its standard minimum equals the overall standard
/// minimum or its high-quality minimum equals the overall high-quality
/// minimum. Ties are all flagged; there is no single-winner tie break.
pub fn summarize(report: &PriceReport) -> ReportSummary {
    let overall_min_standard = report
        .per_shard
        .iter()
        .filter_map(|s| s.min_price_standard)
        .min();
    let overall_min_high_quality = report
        .per_shard
        .iter()
        .filter_map(|s| s.min_price_high_quality)
        .min();

    let highlights = report
        .per_shard
        .iter()
        .map(|s| {
            let cheapest_standard = s.min_price_standard.is_some()
                && s.min_price_standard == overall_min_standard;
            let cheapest_high_quality = s.min_price_high_quality.is_some()
                && s.min_price_high_quality == overall_min_high_quality;
            ShardHighlight {
                shard_id: s.shard_id,
                is_cheapest: cheapest_standard || cheapest_high_quality,
            }
        })
        .collect();

    ReportSummary {
        overall_min_standard,
        overall_min_high_quality,
        highlights,
        no_data: overall_min_standard.is_none() && overall_min_high_quality.is_none(),
    }
}
