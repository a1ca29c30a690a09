//! Data models for scraped prices and game recommendations.

/// A price scraped from the store page, in whatever currency Steam served.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Numeric amount as displayed
    pub amount: f64,
    /// Detected ISO 4217 currency code
    pub currency: String,
}

impl PriceQuote {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self { amount, currency: currency.into() }
    }

    /// True when no conversion is needed before the threshold check.
    pub fn is_usd(&self) -> bool {
        self.currency == "USD"
    }
}

/// A related game linked at the bottom of the alert email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedGame {
    /// Display name
    pub name: &'static str,
    /// Steam store page
    pub url: &'static str,
}
