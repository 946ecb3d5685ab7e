//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Amazon: one review card.
pub static AMAZON_REVIEW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div[data-hook='review']").expect("valid amazon review selector"));

/// Amazon: review body inside a card.
pub static AMAZON_BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("span[data-hook='review-body']").expect("valid amazon body selector")
});

/// Amazon: star marker (`4.0 out of 5 stars`), regular and international layouts.
pub static AMAZON_RATING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        "i[data-hook='review-star-rating'] span, i[data-hook='cmps-review-star-rating'] span",
    )
    .expect("valid amazon rating selector")
});

/// Flipkart: review block (both known layouts).
pub static FLIPKART_BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div._27M-vq, div._1AtVbE").expect("valid flipkart block selector"));

/// Flipkart: review text inside a block.
pub static FLIPKART_TEXT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.t-ZTKy, div._6K-7Co, div._2-N8zT").expect("valid flipkart text selector")
});

/// Flipkart: numeric rating badge.
pub static FLIPKART_RATING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div._3LWZlK").expect("valid flipkart rating selector"));

/// Generic: every paragraph, list item and block that may hold review text.
pub static TEXT_BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, li, div").expect("valid text block selector"));
