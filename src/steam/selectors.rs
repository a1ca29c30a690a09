//! CSS selectors for Steam store pages.
//!
//! Update this file when Valve changes the store HTML structure.
//!
//! **Update process**: When parsing fails, capture an HTML sample,
//! update selectors, and add a test case.

use scraper::Selector;
use std::sync::LazyLock;

/// Price display inside the purchase block. The plain price div is
/// replaced by a discount block while a sale is running, so both
/// variants are matched; the first match on the page wins.
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "div.game_purchase_price.price, \
         div.discount_final_price",
    )
    .unwrap()
});
