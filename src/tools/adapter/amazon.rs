use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::element_text;
use crate::selectors::{AMAZON_BODY_SELECTOR, AMAZON_RATING_SELECTOR, AMAZON_REVIEW_SELECTOR};
use crate::tools::normalize::clean_text;
use crate::tools::types::{RawFragment, RawRating};

static DP_PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/dp/([A-Z0-9]{10})").expect("valid regex"));
static REVIEWS_PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/product-reviews/([A-Z0-9]{10})").expect("valid regex"));
static EMBEDDED_ASIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""asin"\s*:\s*"([A-Z0-9]{10})""#).expect("valid regex"));
static STARS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9.]+)\s+out of 5").expect("valid regex"));

const REVIEWS_HOST: &str = "https://www.amazon.in";

/// Amazon-style listings, keyed by ASIN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmazonAdapter;

impl AmazonAdapter {
    /// ASIN from a `/dp/<ASIN>` or `/product-reviews/<ASIN>` path.
    pub fn resolve_identifier(&self, url: &str) -> Option<String> {
        DP_PATH_REGEX
            .captures(url)
            .or_else(|| REVIEWS_PATH_REGEX.captures(url))
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// ASIN from an embedded `"asin": "<ASIN>"` field in a product page.
    pub fn identifier_from_body(&self, body: &str) -> Option<String> {
        EMBEDDED_ASIN_REGEX
            .captures(body)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Product URL that `resolve_identifier` understands.
    pub fn product_url(asin: &str) -> String {
        format!("{REVIEWS_HOST}/dp/{asin}")
    }

    /// Paginated review listing for the ASIN in `base_url`.
    ///
    /// Without an ASIN the base URL is returned unchanged.
    pub fn locate(&self, base_url: &str, page_index: u32) -> String {
        match self.resolve_identifier(base_url) {
            Some(asin) => format!(
                "{REVIEWS_HOST}/product-reviews/{asin}/ref=cm_cr_getr_d_paging_btm_next_{page_index}?pageNumber={page_index}"
            ),
            None => base_url.to_string(),
        }
    }

    pub fn extract(&self, body: &str) -> Vec<RawFragment> {
        let doc = Html::parse_document(body);

        doc.select(&AMAZON_REVIEW_SELECTOR)
            .filter_map(|card| {
                let text = card
                    .select(&AMAZON_BODY_SELECTOR)
                    .next()
                    .map(|el| clean_text(&element_text(&el)))
                    .unwrap_or_default();
                if text.is_empty() {
                    return None;
                }
                let rating = card
                    .select(&AMAZON_RATING_SELECTOR)
                    .next()
                    .and_then(|el| parse_stars(&el.text().collect::<String>()));
                Some(RawFragment::new(text, rating))
            })
            .collect()
    }
}

/// `"4.0 out of 5 stars"` → `Parsed(4.0)`, rounded to one decimal.
fn parse_stars(label: &str) -> Option<RawRating> {
    let raw = STARS_REGEX.captures(label)?.get(1)?.as_str();
    Some(match raw.parse::<f32>() {
        Ok(value) => RawRating::Parsed((value * 10.0).round() / 10.0),
        Err(_) => RawRating::Unparsed(raw.to_string()),
    })
}
