//! Error kinds for the watch loop.
//!
//! Only `RateFetch` is fatal, and only during startup: the rate table is
//! fetched once and never refreshed. Everything else is raised inside a
//! polling tick, where the driver logs it and retries on the next interval.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    /// The one-time exchange-rate fetch failed (network, HTTP status, or
    /// an undecodable body).
    #[error("failed to fetch exchange rates: {reason}")]
    RateFetch { reason: String },

    /// The product page request itself failed.
    #[error("failed to fetch product page: {reason}")]
    PageFetch { reason: String },

    /// No element on the page matched the price selector. Happens when the
    /// page layout changes, the product is delisted, or the region is blocked.
    #[error("could not find price element on the page")]
    PriceElementNotFound,

    /// The price element text had no parseable number left after cleaning.
    #[error("could not parse price from {text:?}")]
    PriceParse { text: String },

    /// The scraped currency has no entry in the rate table.
    #[error("currency {code} not supported in exchange rates")]
    UnsupportedCurrency { code: String },

    /// SMTP connect, auth, or send failed. The loop only ends on a
    /// successful delivery, so this is retried like any other tick error.
    #[error("failed to send notification: {reason}")]
    Notification { reason: String },
}
