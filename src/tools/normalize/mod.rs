//! Review Normalizer

mod utils;

pub use utils::MAX_RATING;
use utils::*;

use crate::tools::types::{RawFragment, RawRating, ReviewRecord, ReviewSource};

/// Clean review text.
///
/// Performs the following operations in order:
/// 1. Replace non-breaking spaces with plain spaces
/// 2. Remove zero-width characters
/// 3. Remove control characters
/// 4. Collapse whitespace and trim
///
/// # Examples
/// ```
/// use revscrape::tools::normalize::clean_text;
///
/// assert_eq!(clean_text("Great\u{a0}product,\n\n  works   well"), "Great product, works well");
/// ```
pub fn clean_text(text: &str) -> String {
    let result = replace_nbsp(text);
    let result = remove_zero_width_chars(&result);
    let result = remove_control_chars(&result);
    normalize_whitespace(&result)
}

/// Turn a raw fragment into a canonical record.
///
/// Returns `None` only when the cleaned text is empty. A bad rating never
/// drops the review: it becomes `None`.
pub fn normalize(fragment: &RawFragment, source: ReviewSource) -> Option<ReviewRecord> {
    let text = clean_text(&fragment.text);
    if text.is_empty() {
        return None;
    }
    let rating = fragment.rating.as_ref().and_then(normalize_rating);
    Some(ReviewRecord::new(text, rating, source))
}

/// Normalize every fragment, keeping source order.
pub fn normalize_all(fragments: &[RawFragment], source: ReviewSource) -> Vec<ReviewRecord> {
    fragments
        .iter()
        .filter_map(|fragment| normalize(fragment, source))
        .collect()
}

fn normalize_rating(raw: &RawRating) -> Option<f32> {
    let value = match raw {
        RawRating::Parsed(value) => Some(*value),
        RawRating::Unparsed(label) => parse_rating(label),
    };
    let rating = value.and_then(valid_rating);
    if rating.is_none() {
        tracing::debug!(?raw, "rating discarded");
    }
    rating
}
