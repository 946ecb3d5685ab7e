mod client;
mod headers;
mod tests;
mod utils;

pub mod types;

// Re-export types for public use
pub use headers::DEFAULT_ACCEPT_LANGUAGE;
pub use types::*;
pub use utils::block_hint;

use crate::tools::identity::IdentityRotator;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Anything that can turn a locator into a [`FetchResult`].
///
/// The paginator only talks to this trait, so tests can script pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, locator: &str, timeout: Duration) -> Result<FetchResult, FetchError>;
}

/// reqwest-backed fetcher: one pooled client, a fresh identity per request.
pub struct HttpFetcher {
    client: Client,
    identity: IdentityRotator,
    accept_language: String,
}

impl HttpFetcher {
    pub fn new(identity: IdentityRotator, accept_language: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            client: client::build_client()?,
            identity,
            accept_language: accept_language.into(),
        })
    }

    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(IdentityRotator::default(), DEFAULT_ACCEPT_LANGUAGE)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str, timeout: Duration) -> Result<FetchResult, FetchError> {
        let headers = headers::headers_for_request(&self.identity.next(), &self.accept_language);

        let response = self
            .client
            .get(locator)
            .headers(headers)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(e, timeout))?;

        Ok(FetchResult {
            status_code,
            body: Some(body),
        })
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Network(err.to_string())
    }
}

/// Fetch one page with a default fetcher built for this call.
///
/// The client is not cached: its connection pool is tied to the runtime that
/// drives it. Reuse an [`HttpFetcher`] for many pages on one runtime.
///
/// # Examples
/// ```no_run
/// use revscrape::tools::fetch::fetch;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), revscrape::tools::fetch::FetchError> {
/// let page = fetch("https://example.com", Duration::from_secs(20)).await?;
/// println!("status {}", page.status_code);
/// # Ok(())
/// # }
/// ```
pub async fn fetch(locator: &str, timeout: Duration) -> Result<FetchResult, FetchError> {
    HttpFetcher::with_defaults()?.fetch(locator, timeout).await
}
