//! Pure extraction of marketplace listings from a search-results page.
//!
//! eBay marks each result with an `.s-item` container; title, price and
//! link live in fixed sub-elements. Anything structurally incomplete is
//! dropped here rather than reported upward.

use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use url::Url;

use crate::domain::models::Listing;
use crate::filter::is_excluded;

/// Extract every valid, non-accessory listing from a search-results page,
/// preserving document order. Links are resolved against `base_url`.
pub fn extract_listings(html: &str, base_url: &Url) -> Vec<Listing> {
    static ITEM: OnceLock<Selector> = OnceLock::new();
    let item_selector = ITEM.get_or_init(|| Selector::parse(".s-item").unwrap());

    let document = Html::parse_document(html);
    document
        .select(item_selector)
        .filter_map(|item| extract_item(item, base_url))
        .collect()
}

fn extract_item(item: ElementRef<'_>, base_url: &Url) -> Option<Listing> {
    static TITLE: OnceLock<Selector> = OnceLock::new();
    static PRICE: OnceLock<Selector> = OnceLock::new();
    static LINK: OnceLock<Selector> = OnceLock::new();
    static SUBTITLE: OnceLock<Selector> = OnceLock::new();
    let title_selector = TITLE.get_or_init(|| Selector::parse(".s-item__title").unwrap());
    let price_selector = PRICE.get_or_init(|| Selector::parse(".s-item__price").unwrap());
    let link_selector = LINK.get_or_init(|| Selector::parse(".s-item__link").unwrap());
    let subtitle_selector = SUBTITLE.get_or_init(|| Selector::parse(".s-item__subtitle").unwrap());

    let title = element_text(item.select(title_selector).next()?);
    let price_text = element_text(item.select(price_selector).next()?);
    let href = item.select(link_selector).next()?.value().attr("href")?;

    // Subtitle is eBay's secondary description line; usually absent.
    let subtitle = item.select(subtitle_selector).next().map(element_text);

    if is_excluded(&title) || subtitle.as_deref().is_some_and(is_excluded) {
        log::debug!("[EXTRACT] Excluded by keyword: {}", title);
        return None;
    }

    let Some(price) = parse_price(&price_text) else {
        log::debug!("[EXTRACT] Unparseable price {:?} for: {}", price_text, title);
        return None;
    };

    let link = base_url.join(href).ok()?;

    Some(Listing {
        title,
        price,
        link: link.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Normalize eBay price text to a number.
///
/// Strips the pound sign (including the `Â£` mojibake eBay pages produce
/// when the body is decoded as Latin-1) and thousands separators, then
/// parses the first whitespace-delimited token. Ranges like
/// `"£90.00 to £120.00"` resolve to the lower bound.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text.replace("Â£", "").replace('£', "").replace(',', "");
    cleaned.split_whitespace().next()?.parse::<f64>().ok()
}
