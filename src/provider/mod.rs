//! Price source abstractions and the HTTP implementation.
//!
//! This module contains:
//! - The `UnifiedPriceSource` and `ShardPriceSource` traits the aggregator
//!   depends on
//! - `HttpPriceSource`, the production implementation backing both traits
//!
//! The aggregator only ever sees the traits, so tests (and any future
//! source) can stand in without touching the aggregation logic.

mod http;
mod traits;

pub use http::{HttpPriceSource, PriceSourceConfig};
pub use traits::{ShardPriceSource, UnifiedPriceSource};
