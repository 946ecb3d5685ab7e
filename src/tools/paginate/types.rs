use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

use crate::tools::types::ReviewRecord;

/// Hard ceiling on review pages per run. Lower limits are honoured, higher ones clamped.
pub const DEFAULT_PAGE_LIMIT: u32 = 25;

/// Per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Why a run stopped. None of these is an error for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The adapter needs a product identifier and none could be found.
    NoIdentifier,
    /// Network failure or a non-200 status.
    FetchFailed,
    /// A page produced no fragments: end of content, or a block page.
    EmptyPage,
    /// `cap` records collected.
    CapReached,
    /// The last allowed page was processed.
    PageLimitReached,
    /// The caller's deadline passed between two steps.
    DeadlineExceeded,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoIdentifier => "no_identifier",
            Self::FetchFailed => "fetch_failed",
            Self::EmptyPage => "empty_page",
            Self::CapReached => "cap_reached",
            Self::PageLimitReached => "page_limit_reached",
            Self::DeadlineExceeded => "deadline_exceeded",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records of one run plus how it ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeOutcome {
    pub records: Vec<ReviewRecord>,
    pub termination: Termination,
    /// Review-listing requests issued (the identifier probe is not counted).
    pub pages_fetched: u32,
}

impl ScrapeOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ReviewRecord> {
        self.records
    }
}

#[derive(Debug, Clone)]
pub struct PaginateOptions {
    /// At most [`DEFAULT_PAGE_LIMIT`].
    pub page_limit: u32,
    pub timeout: Duration,
    /// Optional cut-off; checked before every step.
    pub deadline: Option<Instant>,
}

impl Default for PaginateOptions {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            deadline: None,
        }
    }
}

impl PaginateOptions {
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub(super) fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Controller-owned progress for one URL.
#[derive(Debug)]
pub(super) struct PaginationState {
    pub collected: Vec<ReviewRecord>,
    pub current_page: u32,
    pub cap: usize,
    pub page_limit: u32,
}

impl PaginationState {
    pub fn new(cap: usize, page_limit: u32) -> Self {
        Self {
            collected: Vec::new(),
            current_page: 1,
            cap,
            page_limit,
        }
    }

    /// Append a page worth of records, never exceeding `cap`.
    pub fn accumulate(&mut self, records: Vec<ReviewRecord>) {
        let room = self.cap.saturating_sub(self.collected.len());
        self.collected.extend(records.into_iter().take(room));
    }

    pub fn is_full(&self) -> bool {
        self.collected.len() >= self.cap
    }

    pub fn finish(self, termination: Termination, pages_fetched: u32) -> ScrapeOutcome {
        ScrapeOutcome {
            records: self.collected,
            termination,
            pages_fetched,
        }
    }
}
