//! Tradewatch Market Data Crate
//!
//! This crate resolves item queries against an in-memory catalog and
//! aggregates current trading-post listings for the resolved item across
//! every shard of a region.
//!
//! # Overview
//!
//! The crate supports:
//! - Tiered free-text resolution over an immutable catalog index
//! - One-shot unified price queries covering a whole region
//! - Automatic degradation to independent per-shard queries on failure
//! - Partial-failure tolerance: a report is always produced
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Command Surface | --> |   TextResolver   |  (tiered catalog match)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | PriceAggregator  |  (unified, then fallback)
//!                          +------------------+
//!                             |            |
//!                             v            v
//!                   +--------------+  +--------------+
//!                   | Unified call |  | Shard calls  |  (scatter/gather)
//!                   +--------------+  +--------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    summarize     |  (minima + highlights)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CatalogEntry`] - Canonical item record (id, name, optional icon)
//! - [`CatalogIndex`] - Immutable name/id index, built once at startup
//! - [`Resolution`] - Primary match plus up to ten alternates
//! - [`PriceReport`] - Per-shard quote summaries plus recent-trade minima
//! - [`ReportSummary`] - Overall minima, highlight flags, no-data flag
//! - [`MarketService`] - Resolve-aggregate-summarize front door

pub mod aggregator;
pub mod catalog;
pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod service;
pub mod summary;

// Re-export all public types from models
pub use models::{
    CatalogEntry, Listing, PriceReport, Region, ReportSource, SaleRecord, Shard, ShardFailure,
    ShardPayload, ShardQuoteSummary, UnifiedPayload,
};

// Re-export catalog types
pub use catalog::{load_entries, CatalogIndex, LoadOutcome, RawCatalogRow};

// Re-export resolver types
pub use resolver::{Resolution, TextResolver, MAX_ALTERNATES};

// Re-export provider types
pub use provider::{HttpPriceSource, PriceSourceConfig, ShardPriceSource, UnifiedPriceSource};

// Re-export aggregation and summary types
pub use aggregator::PriceAggregator;
pub use summary::{summarize, ReportSummary, ShardHighlight};

// Re-export the service layer
pub use service::{ItemMarketView, ItemQuery, LookupOutcome, MarketService};

// Re-export error types
pub use errors::{FailureKind, MarketDataError};
