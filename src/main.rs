//! steam-price-watch - Steam price drop watcher with email alerts
//!
//! Polls one store page until the price reaches the target in USD, then
//! sends a single alert email and exits.

use anyhow::Result;
use steam_price_watch::config::Config;
use steam_price_watch::notify::EmailNotifier;
use steam_price_watch::rates::OpenExchangeClient;
use steam_price_watch::steam::StoreClient;
use steam_price_watch::watcher::Watcher;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env is optional; deployments may set the variables directly.
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("steam_price_watch=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = Config::from_env()?;
    info!(
        "Watching {} for a price at or below ${:.2} (every {}s)",
        config.product_url,
        config.target_price_usd,
        config.check_interval.as_secs()
    );

    let provider = OpenExchangeClient::new(config.exchange_api_key.as_str())?;
    let store = StoreClient::new(config.product_url.as_str())?;
    let notifier = EmailNotifier::new(&config.smtp, config.product_url.as_str())?;

    // The rate table is fetched exactly once; a failure here is fatal.
    let watcher = Watcher::bootstrap(config, &provider).await?;

    tokio::select! {
        price_usd = watcher.run(&store, &notifier) => {
            info!("Alert delivered at ${:.2}. Done.", price_usd);
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received.");
        }
    }

    Ok(())
}
