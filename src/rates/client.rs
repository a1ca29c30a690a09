//! HTTP client for the Open Exchange Rates feed.

use super::models::RateTable;
use crate::error::WatchError;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

const OPEN_EXCHANGE_BASE: &str = "https://openexchangerates.org";

/// Trait for the exchange-rate feed - enables mocking for tests.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest USD-based rate table.
    async fn latest(&self) -> Result<RateTable, WatchError>;
}

/// Subset of the latest.json payload we care about. Extra fields
/// (disclaimer, license, timestamp, base) are ignored.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

/// Open Exchange Rates HTTP client.
pub struct OpenExchangeClient {
    client: Client,
    base_url: String,
    app_id: String,
}

impl OpenExchangeClient {
    /// Creates a new client for the public feed.
    pub fn new(app_id: impl Into<String>) -> Result<Self> {
        Self::with_base_url(app_id, OPEN_EXCHANGE_BASE.to_string())
    }

    /// Creates a new client with a custom base URL (for testing).
    pub fn with_base_url(app_id: impl Into<String>, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, base_url, app_id: app_id.into() })
    }
}

#[async_trait]
impl RateProvider for OpenExchangeClient {
    async fn latest(&self) -> Result<RateTable, WatchError> {
        let url = format!(
            "{}/api/latest.json?app_id={}",
            self.base_url,
            urlencoding::encode(&self.app_id)
        );

        // Log the endpoint only; the app id is a credential.
        debug!("GET {}/api/latest.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| WatchError::RateFetch { reason: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::RateFetch {
                reason: format!("rate service returned status: {status}"),
            });
        }

        let body = response.text().await.map_err(|e| WatchError::RateFetch {
            reason: format!("failed to read response body: {e}"),
        })?;

        let decoded: LatestRatesResponse =
            serde_json::from_str(&body).map_err(|e| WatchError::RateFetch {
                reason: format!("malformed rate response: {e}"),
            })?;

        info!("Fetched {} exchange rates", decoded.rates.len());
        Ok(RateTable::from(decoded.rates))
    }
}
