//! Environment-driven configuration for the watcher.
//!
//! The watched product, target price, and poll interval are compile-time
//! constants; credentials and SMTP coordinates come from the environment
//! (a `.env` file is honored at startup). Missing variables fail fast
//! before any polling starts.

use anyhow::{Context, Result};
use std::time::Duration;

/// Steam store page for the watched product.
pub const STEAM_URL: &str = "https://store.steampowered.com/app/227300/Euro_Truck_Simulator_2/";

/// Display name used in alert subjects and bodies.
pub const PRODUCT_NAME: &str = "Euro Truck Simulator 2";

/// Price threshold in USD at or below which the alert fires.
pub const TARGET_PRICE_USD: f64 = 5.00;

/// Fixed delay between polls.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(3600);

/// Application configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Open Exchange Rates app id
    pub exchange_api_key: String,

    /// SMTP delivery settings for the alert email
    pub smtp: SmtpConfig,

    /// Product page to poll
    pub product_url: String,

    /// Alert threshold in USD
    pub target_price_usd: f64,

    /// Delay between polling ticks
    pub check_interval: Duration,
}

/// SMTP coordinates and credentials for the alert email.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay hostname, e.g. smtp.gmail.com
    pub host: String,

    /// Relay port for STARTTLS, typically 587
    pub port: u16,

    /// Sender address, also used as the login username
    pub sender: String,

    /// Login password (an app password for most providers)
    pub password: String,

    /// Recipient of the alert
    pub recipient: String,
}

impl Config {
    /// Resolves the full configuration from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            exchange_api_key: require_env("EXCHANGE_API_KEY")?,
            smtp: SmtpConfig::from_env()?,
            product_url: STEAM_URL.to_string(),
            target_price_usd: TARGET_PRICE_USD,
            check_interval: CHECK_INTERVAL,
        })
    }
}

impl SmtpConfig {
    pub fn from_env() -> Result<Self> {
        let port = require_env("SMTP_PORT")?;
        Ok(Self {
            host: require_env("SMTP_SERVER")?,
            port: port
                .parse()
                .with_context(|| format!("SMTP_PORT is not a valid port number: {port}"))?,
            sender: require_env("EMAIL")?,
            password: require_env("PASSWORD")?,
            recipient: require_env("TO_EMAIL")?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Environment variable not set: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: &[(&str, &str)] = &[
        ("EXCHANGE_API_KEY", "test-app-id"),
        ("SMTP_SERVER", "smtp.example.com"),
        ("SMTP_PORT", "587"),
        ("EMAIL", "watcher@example.com"),
        ("PASSWORD", "hunter2"),
        ("TO_EMAIL", "player@example.com"),
    ];

    #[test]
    fn test_constants() {
        assert!(STEAM_URL.starts_with("https://store.steampowered.com/app/"));
        assert!(STEAM_URL.contains("Euro_Truck_Simulator_2"));
        assert_eq!(TARGET_PRICE_USD, 5.00);
        assert_eq!(CHECK_INTERVAL, Duration::from_secs(3600));
    }

    // Single test for all env scenarios: the variables are process-global,
    // so splitting this up would race under the parallel test runner.
    #[test]
    fn test_config_from_env() {
        // Save original env vars
        let originals: Vec<(&str, Option<String>)> = ALL_VARS
            .iter()
            .map(|(name, _)| (*name, std::env::var(name).ok()))
            .collect();

        for (name, value) in ALL_VARS {
            std::env::set_var(name, value);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.exchange_api_key, "test-app-id");
        assert_eq!(config.smtp.host, "smtp.example.com");
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.smtp.sender, "watcher@example.com");
        assert_eq!(config.smtp.password, "hunter2");
        assert_eq!(config.smtp.recipient, "player@example.com");
        assert_eq!(config.product_url, STEAM_URL);
        assert_eq!(config.target_price_usd, TARGET_PRICE_USD);
        assert_eq!(config.check_interval, CHECK_INTERVAL);

        // Missing variable fails with its name in the message
        std::env::remove_var("TO_EMAIL");
        let err = Config::from_env().unwrap_err().to_string();
        assert!(err.contains("TO_EMAIL"));
        std::env::set_var("TO_EMAIL", "player@example.com");

        // Unparseable port fails with the offending value
        std::env::set_var("SMTP_PORT", "not-a-port");
        let err = Config::from_env().unwrap_err().to_string();
        assert!(err.contains("SMTP_PORT"));
        assert!(err.contains("not-a-port"));

        // Restore original env vars
        for (name, original) in originals {
            match original {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }
}
