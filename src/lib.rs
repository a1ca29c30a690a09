//! steam-price-watch - Steam price drop watcher with email alerts
//!
//! Polls a single Steam store page, normalizes the listed price to USD
//! through Open Exchange Rates, and emails one alert over SMTP once the
//! price reaches the target.

pub mod config;
pub mod error;
pub mod notify;
pub mod rates;
pub mod steam;
pub mod watcher;

pub use config::Config;
pub use error::WatchError;
pub use rates::RateTable;
pub use steam::models::{PriceQuote, RecommendedGame};
pub use watcher::{TickOutcome, Watcher};
