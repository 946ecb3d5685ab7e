//! Common types shared across tools

use serde::{Deserialize, Serialize};
use std::fmt;

/// Site family a review was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Amazon,
    Flipkart,
    Generic,
}

impl ReviewSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amazon => "amazon",
            Self::Flipkart => "flipkart",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ReviewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical review record.
///
/// Only [`crate::tools::normalize::normalize`] builds these, so `text` is
/// always non-empty and whitespace-collapsed and `rating` is within `[0, 5]`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    text: String,
    rating: Option<f32>,
    source: ReviewSource,
}

impl ReviewRecord {
    pub(crate) fn new(text: String, rating: Option<f32>, source: ReviewSource) -> Self {
        Self {
            text,
            rating,
            source,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> Option<f32> {
        self.rating
    }

    pub fn source(&self) -> ReviewSource {
        self.source
    }

    /// Turn the record back into a fragment (useful for re-normalizing).
    pub fn as_fragment(&self) -> RawFragment {
        RawFragment {
            text: self.text.clone(),
            rating: self.rating.map(RawRating::Parsed),
        }
    }
}

/// Rating as found on the page, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRating {
    /// The adapter already parsed a number.
    Parsed(f32),
    /// The adapter found a rating marker it could not parse.
    Unparsed(String),
}

/// Adapter output before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFragment {
    pub text: String,
    pub rating: Option<RawRating>,
}

impl RawFragment {
    pub fn new(text: impl Into<String>, rating: Option<RawRating>) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }

    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }
}

/// One page fetch: where to go and which (1-based) page that is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub locator: String,
    pub page_index: u32,
}
