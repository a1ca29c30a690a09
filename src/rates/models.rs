//! Currency conversion against a USD-based rate snapshot.

use crate::error::WatchError;
use std::collections::HashMap;

/// Snapshot of exchange rates keyed by ISO 4217 code, quoted as units of
/// that currency per 1 USD. Fetched once at startup and never refreshed.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Converts an amount in the given currency to USD.
    ///
    /// The feed quotes units-per-USD, so conversion divides by the rate:
    /// 4.49 EUR at a rate of 0.91 is 4.49 / 0.91 USD.
    pub fn to_usd(&self, amount: f64, currency: &str) -> Result<f64, WatchError> {
        let rate = self.rates.get(currency).ok_or_else(|| WatchError::UnsupportedCurrency {
            code: currency.to_string(),
        })?;
        Ok(amount / rate)
    }

    /// Returns the raw rate for a currency, if present.
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl From<HashMap<String, f64>> for RateTable {
    fn from(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }
}
