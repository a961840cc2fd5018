//! HTTP implementation of the price source traits.
//!
//! One struct serves both traits against the same price service:
//!
//! - Unified: `GET {base}/api/{region_code}/{item_id}`
//! - Single shard: `GET {base}/api/shard/{shard_id}/{item_id}`
//!
//! An HTTP 404 from either endpoint means the item has no market data and
//! decodes to an empty payload. Timeouts are enforced per call class by two
//! pre-built clients; the unified call gets the longer deadline because it
//! covers the whole region.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::MarketDataError;
use crate::models::{Shard, ShardPayload, UnifiedPayload};

use super::traits::{ShardPriceSource, UnifiedPriceSource};

const DEFAULT_BASE_URL: &str = "https://prices.tradewatch.app";

/// Default deadline for the unified multi-shard call.
const UNIFIED_TIMEOUT: Duration = Duration::from_secs(15);

/// Default deadline for a single-shard call.
const SHARD_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`HttpPriceSource`].
#[derive(Clone, Debug)]
pub struct PriceSourceConfig {
    pub base_url: String,
    pub unified_timeout: Duration,
    pub shard_timeout: Duration,
    pub user_agent: String,
}

impl Default for PriceSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            unified_timeout: UNIFIED_TIMEOUT,
            shard_timeout: SHARD_TIMEOUT,
            user_agent: format!("tradewatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP price source backing both the unified and the per-shard traits.
pub struct HttpPriceSource {
    unified_client: Client,
    shard_client: Client,
    base_url: String,
}

impl HttpPriceSource {
    /// Build a source from configuration.
    pub fn new(config: PriceSourceConfig) -> Self {
        let unified_client = Client::builder()
            .timeout(config.unified_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|_| Client::new());
        let shard_client = Client::builder()
            .timeout(config.shard_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            unified_client,
            shard_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// Returns `Ok(None)` on 404 so callers can substitute an empty payload.
    async fn fetch_json<T>(
        &self,
        client: &Client,
        url: &str,
        source_name: &str,
    ) -> Result<Option<T>, MarketDataError>
    where
        T: DeserializeOwned,
    {
        let response = client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    source_name: source_name.to_string(),
                }
            } else {
                MarketDataError::SourceError {
                    source_name: source_name.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} answered 404 for {}, treating as empty", source_name, url);
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(MarketDataError::SourceError {
                source_name: source_name.to_string(),
                message: format!("HTTP error: {}", response.status()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::SourceError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| MarketDataError::MalformedResponse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl UnifiedPriceSource for HttpPriceSource {
    async fn fetch_region(
        &self,
        region_code: &str,
        item_id: u32,
    ) -> Result<UnifiedPayload, MarketDataError> {
        let url = format!("{}/api/{}/{}", self.base_url, region_code, item_id);
        debug!("Fetching unified prices for item {} from {}", item_id, url);

        let payload = self
            .fetch_json::<UnifiedPayload>(&self.unified_client, &url, "unified")
            .await?;
        Ok(payload.unwrap_or_default())
    }
}

#[async_trait]
impl ShardPriceSource for HttpPriceSource {
    async fn fetch_shard(
        &self,
        shard: &Shard,
        item_id: u32,
    ) -> Result<ShardPayload, MarketDataError> {
        let url = format!("{}/api/shard/{}/{}", self.base_url, shard.id, item_id);
        debug!(
            "Fetching {} prices for item {} from {}",
            shard.name, item_id, url
        );

        let payload = self
            .fetch_json::<ShardPayload>(&self.shard_client, &url, &shard.name)
            .await?;
        Ok(payload.unwrap_or_default())
    }
}
