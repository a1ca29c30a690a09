//! HTTP client for Steam store pages using wreq for TLS fingerprint emulation.

use super::models::PriceQuote;
use super::parser;
use crate::error::WatchError;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching the current product price - enables mocking for tests.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the product page and extracts the current price quote.
    async fn fetch_price(&self) -> Result<PriceQuote, WatchError>;
}

/// Steam store HTTP client with browser impersonation.
pub struct StoreClient {
    client: Client,
    product_url: String,
}

impl StoreClient {
    /// Creates a new client for the given store page URL.
    pub fn new(product_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, product_url: product_url.into() })
    }

    /// Fetches the raw product page HTML.
    async fn fetch_page(&self) -> Result<String, WatchError> {
        debug!("GET {}", self.product_url);

        let response = self
            .client
            .get(&self.product_url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .map_err(|e| WatchError::PageFetch { reason: e.to_string() })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Storefront unavailable (503). Steam may be in maintenance.");
        }

        if !status.is_success() {
            return Err(WatchError::PageFetch {
                reason: format!("storefront returned status: {status}"),
            });
        }

        response.text().await.map_err(|e| WatchError::PageFetch {
            reason: format!("failed to read response body: {e}"),
        })
    }
}

#[async_trait]
impl PriceSource for StoreClient {
    async fn fetch_price(&self) -> Result<PriceQuote, WatchError> {
        let html = self.fetch_page().await?;
        parser::extract_quote(&html)
    }
}
