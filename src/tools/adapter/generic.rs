use scraper::Html;

use super::{element_text, token_count};
use crate::selectors::TEXT_BLOCK_SELECTOR;
use crate::tools::normalize::clean_text;
use crate::tools::types::RawFragment;

const REVIEW_KEYWORDS: [&str; 7] = [
    "review", "pros", "cons", "rating", "stars", "verified", "bought",
];

const STAR_GLYPH: char = '★';

/// Long blocks are kept even without a keyword.
const MIN_PROSE_TOKENS: usize = 8;

/// Any other site: one page, heuristic text-block scan, no ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericAdapter;

impl GenericAdapter {
    /// Single page: always the URL itself.
    pub fn locate(&self, base_url: &str, _page_index: u32) -> String {
        base_url.to_string()
    }

    pub fn extract(&self, body: &str) -> Vec<RawFragment> {
        let doc = Html::parse_document(body);

        doc.select(&TEXT_BLOCK_SELECTOR)
            .map(|el| clean_text(&element_text(&el)))
            .filter(|text| looks_like_review(text))
            .map(RawFragment::text_only)
            .collect()
    }
}

/// Review-likeness heuristic for free text.
///
/// True when the text mentions a review keyword (case-insensitive), carries
/// a star glyph, or is at least eight tokens long.
pub fn looks_like_review(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    REVIEW_KEYWORDS.iter().any(|k| lower.contains(k))
        || lower.contains(STAR_GLYPH)
        || token_count(text) >= MIN_PROSE_TOKENS
}
