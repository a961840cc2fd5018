//! Core data types
//!
//! This module contains the data types the pipeline passes around:
//! - `catalog` - Canonical catalog records (CatalogEntry)
//! - `shard` - Shard and region identity (Shard, Region)
//! - `payload` - Wire payloads from the price sources (Listing, SaleRecord, UnifiedPayload, ShardPayload)
//! - `report` - Aggregated output (ShardQuoteSummary, PriceReport, ReportSource, ShardFailure)

mod catalog;
mod payload;
mod report;
mod shard;

pub use catalog::CatalogEntry;
pub use payload::{Listing, SaleRecord, ShardPayload, UnifiedPayload};
pub use report::{PriceReport, ReportSource, ShardFailure, ShardQuoteSummary};
pub use shard::{Region, Shard};

pub(crate) use payload::timestamp_from_millis;
