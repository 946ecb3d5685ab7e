//! Test fixtures: a scripted fetcher and synthetic listing pages.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::tools::fetch::{FetchError, FetchResult, PageFetcher};

/// Serves canned responses by exact locator and records every call.
///
/// Unknown locators get `fallback` (an empty 200 page unless changed).
pub(crate) struct ScriptedFetcher {
    pages: HashMap<String, Result<FetchResult, String>>,
    fallback: Result<FetchResult, String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fallback: Ok(FetchResult::new(200, "<html><body></body></html>")),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn page(mut self, locator: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.pages
            .insert(locator.into(), Ok(FetchResult::new(status, body)));
        self
    }

    pub fn network_error(mut self, locator: impl Into<String>) -> Self {
        self.pages
            .insert(locator.into(), Err("connection reset by peer".into()));
        self
    }

    pub fn fallback(mut self, status: u16, body: impl Into<String>) -> Self {
        self.fallback = Ok(FetchResult::new(status, body));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch(&self, locator: &str, _timeout: Duration) -> Result<FetchResult, FetchError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(locator.to_string());
        match self.pages.get(locator).unwrap_or(&self.fallback) {
            Ok(result) => Ok(result.clone()),
            Err(msg) => Err(FetchError::Network(msg.clone())),
        }
    }
}

pub(crate) const ASIN: &str = "B0EXAMPLE1";

pub(crate) fn amazon_product_url() -> String {
    format!("https://www.amazon.in/Electric-Kettle/dp/{ASIN}/ref=sr_1_3")
}

pub(crate) fn amazon_page_url(page: u32) -> String {
    format!(
        "https://www.amazon.in/product-reviews/{ASIN}/ref=cm_cr_getr_d_paging_btm_next_{page}?pageNumber={page}"
    )
}

/// Amazon listing page with `count` reviews labelled `p{page}-r{i}`.
pub(crate) fn amazon_listing(page: u32, count: usize) -> String {
    let cards: String = (1..=count)
        .map(|i| {
            format!(
                r#"<div data-hook="review">
                    <i data-hook="review-star-rating"><span>{}.0 out of 5 stars</span></i>
                    <span data-hook="review-body"><span>Review p{page}-r{i} kettle works</span></span>
                </div>"#,
                (i % 5) + 1
            )
        })
        .collect();
    format!("<html><body><div id=\"cm_cr-review_list\">{cards}</div></body></html>")
}

/// Flipkart listing page with the given `(text, rating)` blocks.
pub(crate) fn flipkart_listing(blocks: &[(&str, &str)]) -> String {
    let blocks: String = blocks
        .iter()
        .map(|(text, rating)| {
            format!(
                r#"<div class="_27M-vq"><div class="_3LWZlK">{rating}</div><div class="t-ZTKy"><div>{text}</div></div></div>"#
            )
        })
        .collect();
    format!("<html><body>{blocks}</body></html>")
}
