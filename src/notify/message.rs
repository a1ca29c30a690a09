//! Alert subject and body construction.
//!
//! Kept separate from the SMTP transport so the exact wording can be
//! asserted in tests without a mail server.

use crate::config;
use crate::steam::models::RecommendedGame;

/// Builds the alert subject line, e.g.
/// "Price Alert: Euro Truck Simulator 2 is now $4.93".
pub fn subject(price_usd: f64) -> String {
    format!("Price Alert: {} is now ${:.2}", config::PRODUCT_NAME, price_usd)
}

/// Builds the plain-text alert body: the deal line, the store link, and
/// one "name - url" line per recommended game.
pub fn body(price_usd: f64, product_url: &str, recommendations: &[RecommendedGame]) -> String {
    let mut body = format!(
        "The game is now available for ${price_usd:.2} on Steam. Check it out here: {product_url}\n\nRecommended games for you:\n"
    );

    for game in recommendations {
        body.push_str(&format!("{} - {}\n", game.name, game.url));
    }

    body
}
