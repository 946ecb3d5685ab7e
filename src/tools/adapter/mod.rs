//! Site Adapters
//!
//! Each supported site family knows how to build the URL of review page `n`
//! and how to pull raw review fragments out of a fetched page. The set of
//! variants is closed; [`select_adapter`] picks one from the URL alone.

mod amazon;
mod flipkart;
mod generic;

pub use amazon::AmazonAdapter;
pub use flipkart::FlipkartAdapter;
pub use generic::{looks_like_review, GenericAdapter};

use crate::tools::types::{RawFragment, ReviewSource};
use scraper::ElementRef;
use url::Url;

/// Host patterns checked in order; first match wins.
const ADAPTER_RULES: [(&str, ReviewSource); 2] = [
    ("amazon.", ReviewSource::Amazon),
    ("flipkart.", ReviewSource::Flipkart),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteAdapter {
    Amazon(AmazonAdapter),
    Flipkart(FlipkartAdapter),
    Generic(GenericAdapter),
}

impl SiteAdapter {
    pub fn for_source(source: ReviewSource) -> Self {
        match source {
            ReviewSource::Amazon => Self::Amazon(AmazonAdapter),
            ReviewSource::Flipkart => Self::Flipkart(FlipkartAdapter),
            ReviewSource::Generic => Self::Generic(GenericAdapter),
        }
    }

    pub fn source(&self) -> ReviewSource {
        match self {
            Self::Amazon(_) => ReviewSource::Amazon,
            Self::Flipkart(_) => ReviewSource::Flipkart,
            Self::Generic(_) => ReviewSource::Generic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Amazon(_) => "AmazonAdapter",
            Self::Flipkart(_) => "FlipkartAdapter",
            Self::Generic(_) => "GenericAdapter",
        }
    }

    /// URL of the 1-based review page `page_index`.
    pub fn locate(&self, base_url: &str, page_index: u32) -> String {
        match self {
            Self::Amazon(a) => a.locate(base_url, page_index),
            Self::Flipkart(f) => f.locate(base_url, page_index),
            Self::Generic(g) => g.locate(base_url, page_index),
        }
    }

    /// Raw review fragments found in a page body, in page order.
    pub fn extract(&self, body: &str) -> Vec<RawFragment> {
        match self {
            Self::Amazon(a) => a.extract(body),
            Self::Flipkart(f) => f.extract(body),
            Self::Generic(g) => g.extract(body),
        }
    }

    /// Whether `locate` needs a product identifier resolved first.
    pub fn needs_identifier(&self) -> bool {
        matches!(self, Self::Amazon(_))
    }

    /// Product identifier taken from the URL alone.
    pub fn resolve_identifier(&self, base_url: &str) -> Option<String> {
        match self {
            Self::Amazon(a) => a.resolve_identifier(base_url),
            Self::Flipkart(_) | Self::Generic(_) => None,
        }
    }

    /// Product identifier embedded in a fetched product page.
    pub fn identifier_from_body(&self, body: &str) -> Option<String> {
        match self {
            Self::Amazon(a) => a.identifier_from_body(body),
            Self::Flipkart(_) | Self::Generic(_) => None,
        }
    }

    /// Base URL that `locate` understands once the identifier is known.
    pub fn canonical_base(&self, identifier: &str, original: &str) -> String {
        match self {
            Self::Amazon(_) => AmazonAdapter::product_url(identifier),
            Self::Flipkart(_) | Self::Generic(_) => original.to_string(),
        }
    }

    /// Whether the site has more than one review page.
    pub fn paginates(&self) -> bool {
        !matches!(self, Self::Generic(_))
    }
}

/// Pick the adapter for `url`. Pure: no network access.
///
/// # Examples
/// ```
/// use revscrape::tools::adapter::select_adapter;
/// use revscrape::ReviewSource;
///
/// assert_eq!(select_adapter("https://www.amazon.in/dp/B0EXAMPLE1").source(), ReviewSource::Amazon);
/// assert_eq!(select_adapter("https://blog.example.com/post").source(), ReviewSource::Generic);
/// ```
pub fn select_adapter(url: &str) -> SiteAdapter {
    let host = host_key(url);
    ADAPTER_RULES
        .iter()
        .find(|(pattern, _)| host.contains(pattern))
        .map(|(_, source)| SiteAdapter::for_source(*source))
        .unwrap_or(SiteAdapter::Generic(GenericAdapter))
}

/// Lowercased, IDNA-canonical host; the raw lowercased input when unparsable.
fn host_key(url: &str) -> String {
    match Url::parse(url.trim()).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(host) => {
            let lower = host.to_ascii_lowercase();
            idna::domain_to_ascii(&lower).unwrap_or(lower)
        }
        None => url.trim().to_ascii_lowercase(),
    }
}

/// Text of an element with its text nodes joined by single spaces.
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ")
}

/// Whitespace-delimited token count.
pub(crate) fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
