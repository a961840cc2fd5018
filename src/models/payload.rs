//! Wire payloads returned by the price sources.
//!
//! Both endpoints return the same listing shape; the unified endpoint adds
//! region-wide recent sale history and a per-shard upload-time map. All
//! timestamps on the wire are unix milliseconds.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One active listing on a shard's trading post.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Shard the listing is posted on
    pub shard_id: u32,

    /// Quality flag: high-quality variants are priced independently
    #[serde(default)]
    pub high_quality: bool,

    /// Asking price per unit
    pub price_per_unit: Decimal,
}

/// One realized sale from the region-wide recent history.
///
/// Independent of the per-shard listings; a sale is a completed transaction,
/// not an ask.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Quality flag of the sold unit
    #[serde(default)]
    pub high_quality: bool,

    /// Realized price per unit
    pub price_per_unit: Decimal,
}

/// Response from the unified multi-shard endpoint.
///
/// A "not found" response from the source decodes to the default (empty)
/// payload - an unknown item is a valid empty result, not an error.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedPayload {
    /// Active listings across every shard of the region
    #[serde(default)]
    pub listings: Vec<Listing>,

    /// Region-wide realized sales, newest first
    #[serde(default)]
    pub recent_history: Vec<SaleRecord>,

    /// Last upload time per shard id, unix milliseconds
    #[serde(default)]
    pub upload_times: HashMap<u32, i64>,
}

/// Response from the single-shard endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShardPayload {
    /// Active listings on this shard
    #[serde(default)]
    pub listings: Vec<Listing>,

    /// Last upload time for this shard, unix milliseconds
    #[serde(default)]
    pub last_upload_time: Option<i64>,
}

/// Convert a wire timestamp to UTC, dropping out-of-range values.
pub(crate) fn timestamp_from_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unified_payload_deserialization() {
        let json = r#"{
            "listings": [
                {"shardId": 401, "highQuality": false, "pricePerUnit": 250},
                {"shardId": 402, "highQuality": true, "pricePerUnit": 980}
            ],
            "recentHistory": [
                {"highQuality": false, "pricePerUnit": 240}
            ],
            "uploadTimes": {"401": 1721822400000}
        }"#;

        let payload: UnifiedPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.listings.len(), 2);
        assert_eq!(payload.listings[0].shard_id, 401);
        assert_eq!(payload.listings[1].price_per_unit, dec!(980));
        assert!(payload.listings[1].high_quality);
        assert_eq!(payload.recent_history.len(), 1);
        assert_eq!(payload.upload_times.get(&401), Some(&1721822400000));
    }

    #[test]
    fn test_unified_payload_missing_fields_default_empty() {
        let payload: UnifiedPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.listings.is_empty());
        assert!(payload.recent_history.is_empty());
        assert!(payload.upload_times.is_empty());
    }

    #[test]
    fn test_shard_payload_deserialization() {
        let json = r#"{
            "listings": [{"shardId": 403, "pricePerUnit": 75}],
            "lastUploadTime": 1721822400000
        }"#;

        let payload: ShardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.listings.len(), 1);
        assert!(!payload.listings[0].high_quality);
        assert_eq!(payload.last_upload_time, Some(1721822400000));
    }

    #[test]
    fn test_timestamp_from_millis() {
        let ts = timestamp_from_millis(1721822400000).unwrap();
        assert_eq!(ts.timestamp_millis(), 1721822400000);
        assert!(timestamp_from_millis(i64::MAX).is_none());
    }
}
