use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::{element_text, token_count};
use crate::selectors::{FLIPKART_BLOCK_SELECTOR, FLIPKART_RATING_SELECTOR, FLIPKART_TEXT_SELECTOR};
use crate::tools::normalize::clean_text;
use crate::tools::types::{RawFragment, RawRating};

static PAGE_PARAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([?&])page=\d+").expect("valid regex"));

/// Shorter texts are UI noise ("Read more", "Certified Buyer").
const MIN_REVIEW_TOKENS: usize = 4;

/// Flipkart-style listings, paginated by a `page` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipkartAdapter;

impl FlipkartAdapter {
    /// Rewrite an existing `page=N` parameter, or append one.
    pub fn locate(&self, base_url: &str, page_index: u32) -> String {
        if PAGE_PARAM_REGEX.is_match(base_url) {
            return PAGE_PARAM_REGEX
                .replace(base_url, format!("${{1}}page={page_index}"))
                .into_owned();
        }
        let sep = if base_url.contains('?') { '&' } else { '?' };
        format!("{base_url}{sep}page={page_index}")
    }

    pub fn extract(&self, body: &str) -> Vec<RawFragment> {
        let doc = Html::parse_document(body);

        doc.select(&FLIPKART_BLOCK_SELECTOR)
            .filter_map(|block| {
                let text_el = block.select(&FLIPKART_TEXT_SELECTOR).next()?;
                let text = clean_text(&element_text(&text_el));
                if token_count(&text) < MIN_REVIEW_TOKENS {
                    return None;
                }
                let rating = block.select(&FLIPKART_RATING_SELECTOR).next().map(|el| {
                    let label = clean_text(&element_text(&el));
                    match label.parse::<f32>() {
                        Ok(value) => RawRating::Parsed(value),
                        Err(_) => RawRating::Unparsed(label),
                    }
                });
                Some(RawFragment::new(text, rating))
            })
            .collect()
    }
}
