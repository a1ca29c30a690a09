//! Exchange-rate feed client and USD conversion table.

pub mod client;
pub mod models;

pub use client::{OpenExchangeClient, RateProvider};
pub use models::RateTable;
