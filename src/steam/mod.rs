//! Steam storefront client, price parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{PriceSource, StoreClient};
pub use models::{PriceQuote, RecommendedGame};
