/// Private helper functions for review text cleaning
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Highest rating any supported site uses.
pub const MAX_RATING: f32 = 5.0;

/// Replace non-breaking spaces (U+00A0, U+202F) with plain spaces.
pub fn replace_nbsp(text: &str) -> String {
    text.replace(['\u{00A0}', '\u{202F}'], " ")
}

/// Remove invisible zero-width characters.
pub fn remove_zero_width_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(*c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}'))
        .collect()
}

/// Remove control characters; newlines and tabs survive until whitespace collapsing.
pub fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect()
}

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

/// Accept a rating only when it is a finite number in `[0, MAX_RATING]`.
pub fn valid_rating(value: f32) -> Option<f32> {
    (value.is_finite() && (0.0..=MAX_RATING).contains(&value)).then_some(value)
}

/// Parse a rating label such as `"4"`, `" 4.5 "` or `"4,5"`.
pub fn parse_rating(raw: &str) -> Option<f32> {
    let cleaned = normalize_whitespace(&replace_nbsp(raw)).replace(',', ".");
    cleaned.parse::<f32>().ok()
}
