//! Polling driver: scrape, normalize to USD, compare, notify.
//!
//! The loop has three phases. Startup fetches the exchange-rate table
//! once; a failure there is fatal. Polling then repeats a tick at a
//! fixed interval, logging and swallowing every tick error. The first
//! successful notification ends the run.

use crate::config::Config;
use crate::error::WatchError;
use crate::notify::Notify;
use crate::rates::{RateProvider, RateTable};
use crate::steam::models::RecommendedGame;
use crate::steam::PriceSource;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Cross-sell list appended to every alert email.
pub const RECOMMENDED_GAMES: &[RecommendedGame] = &[
    RecommendedGame {
        name: "American Truck Simulator",
        url: "https://store.steampowered.com/app/270880/American_Truck_Simulator/",
    },
    RecommendedGame {
        name: "Farming Simulator 19",
        url: "https://store.steampowered.com/app/836930/Farming_Simulator_19/",
    },
    RecommendedGame {
        name: "Cities: Skylines",
        url: "https://store.steampowered.com/app/255710/Cities_Skylines/",
    },
];

/// Result of a single poll cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Price reached the target and the alert was delivered.
    Notified { price_usd: f64 },
    /// Price is still above the target; keep polling.
    AboveTarget { price_usd: f64 },
}

/// The polling driver. Holds the configuration and the rate table
/// fetched at startup.
pub struct Watcher {
    config: Config,
    rates: RateTable,
}

impl Watcher {
    pub fn new(config: Config, rates: RateTable) -> Self {
        Self { config, rates }
    }

    /// Fetches the rate table once and builds the watcher.
    ///
    /// A failed fetch is returned to the caller and no polling starts;
    /// the table is never refreshed afterwards.
    pub async fn bootstrap(
        config: Config,
        provider: &impl RateProvider,
    ) -> Result<Self, WatchError> {
        let rates = provider.latest().await?;
        Ok(Self::new(config, rates))
    }

    /// Runs a single poll cycle: fetch the quote, convert to USD unless
    /// it already is, then notify if the price is at or below target.
    pub async fn tick(
        &self,
        source: &impl PriceSource,
        notifier: &impl Notify,
    ) -> Result<TickOutcome, WatchError> {
        let quote = source.fetch_price().await?;
        info!("Current price: {} {}", quote.amount, quote.currency);

        let price_usd = if quote.is_usd() {
            quote.amount
        } else {
            let converted = self.rates.to_usd(quote.amount, &quote.currency)?;
            info!("Converted price: ${:.2} USD", converted);
            converted
        };

        if price_usd <= self.config.target_price_usd {
            notifier.send_price_alert(price_usd, RECOMMENDED_GAMES).await?;
            return Ok(TickOutcome::Notified { price_usd });
        }

        debug!("Target not reached: ${:.2} > ${:.2}", price_usd, self.config.target_price_usd);
        Ok(TickOutcome::AboveTarget { price_usd })
    }

    /// Polls until an alert is delivered and returns the final USD price.
    ///
    /// Tick errors are logged and retried on the next interval; a failed
    /// notification keeps the loop alive just like a scrape failure.
    pub async fn run(&self, source: &impl PriceSource, notifier: &impl Notify) -> f64 {
        loop {
            match self.tick(source, notifier).await {
                Ok(TickOutcome::Notified { price_usd }) => return price_usd,
                Ok(TickOutcome::AboveTarget { .. }) => {}
                Err(e) => {
                    error!("Tick failed: {}. Retrying next interval.", e);
                }
            }

            sleep(self.config.check_interval).await;
        }
    }
}
