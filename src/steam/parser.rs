//! Price extraction from Steam store HTML.

use super::models::PriceQuote;
use super::selectors;
use crate::error::WatchError;
use scraper::Html;
use tracing::debug;

/// Parses the price quote out of a full store page.
///
/// The first element matching the price selector wins. Its text is
/// reduced to a number and scanned for a currency symbol.
pub fn extract_quote(html: &str) -> Result<PriceQuote, WatchError> {
    let document = Html::parse_document(html);

    let element =
        document.select(&selectors::PRICE).next().ok_or(WatchError::PriceElementNotFound)?;

    let text = element.text().collect::<String>();
    let text = text.trim();

    let quote = PriceQuote {
        amount: extract_amount(text)?,
        currency: detect_currency(text).to_string(),
    };

    debug!("Parsed price: {} {}", quote.amount, quote.currency);
    Ok(quote)
}

/// Detects the currency from symbols in the price text.
///
/// Checked in a fixed order so text carrying several symbols resolves
/// deterministically: rupee, then dollar, then euro. Text with no known
/// symbol is assumed to be USD.
pub fn detect_currency(text: &str) -> &'static str {
    if text.contains('₹') {
        "INR"
    } else if text.contains('$') {
        "USD"
    } else if text.contains('€') {
        "EUR"
    } else {
        "USD"
    }
}

/// Extracts the numeric amount from price text.
///
/// Everything except ASCII digits and periods is dropped before parsing,
/// so "$4.99 USD" becomes 4.99. Text that leaves nothing behind (for
/// example "Free to Play") or does not form a number fails.
pub fn extract_amount(text: &str) -> Result<f64, WatchError> {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    if cleaned.is_empty() {
        return Err(WatchError::PriceParse { text: text.to_string() });
    }

    cleaned.parse().map_err(|_| WatchError::PriceParse { text: text.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_price(price_html: &str) -> String {
        format!(
            r#"<html><body>
                <div class="game_area_purchase_game_wrapper">
                    <div class="game_purchase_action">
                        {price_html}
                    </div>
                </div>
            </body></html>"#
        )
    }

    #[test]
    fn test_extract_amount_plain_number() {
        assert_eq!(extract_amount("4.99").unwrap(), 4.99);
    }

    #[test]
    fn test_extract_amount_with_symbol_and_code() {
        assert_eq!(extract_amount("$4.99 USD").unwrap(), 4.99);
        assert_eq!(extract_amount("₹ 459").unwrap(), 459.0);
        assert_eq!(extract_amount(" 4.49€ ").unwrap(), 4.49);
    }

    #[test]
    fn test_extract_amount_comma_is_stripped() {
        // Grouping and decimal commas are dropped, not converted
        assert_eq!(extract_amount("1,299").unwrap(), 1299.0);
        assert_eq!(extract_amount("9,99€").unwrap(), 999.0);
    }

    #[test]
    fn test_extract_amount_no_digits() {
        let err = extract_amount("Free to Play").unwrap_err();
        assert!(matches!(err, WatchError::PriceParse { ref text } if text == "Free to Play"));

        assert!(extract_amount("").is_err());
        assert!(extract_amount("   ").is_err());
    }

    #[test]
    fn test_extract_amount_multiple_periods() {
        let err = extract_amount("1.2.3").unwrap_err();
        assert!(matches!(err, WatchError::PriceParse { .. }));
    }

    #[test]
    fn test_detect_currency_symbols() {
        assert_eq!(detect_currency("₹ 459"), "INR");
        assert_eq!(detect_currency("$19.99"), "USD");
        assert_eq!(detect_currency("4,49€"), "EUR");
    }

    #[test]
    fn test_detect_currency_priority() {
        // Rupee wins over dollar, dollar wins over euro
        assert_eq!(detect_currency("₹459 ($5.51)"), "INR");
        assert_eq!(detect_currency("$4.99 (4.49€)"), "USD");
    }

    #[test]
    fn test_detect_currency_default() {
        assert_eq!(detect_currency("19.99"), "USD");
        assert_eq!(detect_currency("CDN 19.99"), "USD");
    }

    #[test]
    fn test_extract_quote_us_page() {
        let html = page_with_price(
            r#"<div class="game_purchase_price price" data-price-final="1999">$19.99</div>"#,
        );

        let quote = extract_quote(&html).unwrap();
        assert_eq!(quote.amount, 19.99);
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn test_extract_quote_trims_whitespace() {
        let html = page_with_price(
            "<div class=\"game_purchase_price price\">\n\t\t\t$4.99\t\t\t</div>",
        );

        let quote = extract_quote(&html).unwrap();
        assert_eq!(quote.amount, 4.99);
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn test_extract_quote_euro_page() {
        let html = page_with_price(r#"<div class="game_purchase_price price">4.49€</div>"#);

        let quote = extract_quote(&html).unwrap();
        assert_eq!(quote.amount, 4.49);
        assert_eq!(quote.currency, "EUR");
    }

    #[test]
    fn test_extract_quote_rupee_page() {
        let html = page_with_price(r#"<div class="game_purchase_price price">₹ 459</div>"#);

        let quote = extract_quote(&html).unwrap();
        assert_eq!(quote.amount, 459.0);
        assert_eq!(quote.currency, "INR");
    }

    #[test]
    fn test_extract_quote_discounted_page() {
        let html = page_with_price(
            r#"<div class="discount_block game_purchase_discount">
                <div class="discount_pct">-75%</div>
                <div class="discount_prices">
                    <div class="discount_original_price">$19.99</div>
                    <div class="discount_final_price">$4.99</div>
                </div>
            </div>"#,
        );

        let quote = extract_quote(&html).unwrap();
        assert_eq!(quote.amount, 4.99);
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn test_extract_quote_missing_element() {
        let html = r#"<html><body><h1>Age verification</h1></body></html>"#;

        let err = extract_quote(html).unwrap_err();
        assert!(matches!(err, WatchError::PriceElementNotFound));
    }

    #[test]
    fn test_extract_quote_free_to_play() {
        let html = page_with_price(r#"<div class="game_purchase_price price">Free to Play</div>"#);

        let err = extract_quote(&html).unwrap_err();
        assert!(matches!(err, WatchError::PriceParse { .. }));
    }
}
