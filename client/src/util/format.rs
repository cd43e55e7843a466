//! Display formatting for prices, ratings, and product details.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Retailer;
use crate::util::link::{BLOCKED_HREF, safe_href};

/// Maximum number of specs shown on a product card.
pub const CARD_SPEC_LIMIT: usize = 4;

/// Format a price with a dollar sign and exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Format a rating as sent by the backend; missing ratings show a dash.
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "–".to_owned(), |r| r.to_string())
}

/// Specs shown on a product card.
pub fn card_specs(specs: &[String]) -> &[String] {
    &specs[..specs.len().min(CARD_SPEC_LIMIT)]
}

/// Link target for a retailer row; missing or unsafe URLs become `#`.
pub fn retailer_href(retailer: &Retailer) -> &str {
    retailer.url.as_deref().map_or(BLOCKED_HREF, safe_href)
}
