use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Outcome of one page request.
///
/// Any HTTP status is data here; callers decide what a non-200 means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub status_code: u16,
    pub body: Option<String>,
}

impl FetchResult {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: Some(body.into()),
        }
    }

    /// Status without a body (e.g. HEAD-like or empty responses).
    pub fn status_only(status_code: u16) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    /// Exactly 200: the only status a listing page is parsed from.
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Body text, empty if none was read.
    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Transport-level failures. The paginator reads all of these as "no more data".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to build client: {0}")]
    Client(String),
}
