//! Pagination Controller
//!
//! Drives fetch → extract → normalize → accumulate for one URL, strictly one
//! page at a time, until one of the [`Termination`] conditions holds.

pub mod limiter;
pub mod types;

pub use limiter::*;
pub use types::*;

use tracing::{debug, info, warn};

use crate::tools::adapter::SiteAdapter;
use crate::tools::fetch::{block_hint, PageFetcher};
use crate::tools::normalize::normalize_all;
use crate::tools::types::PageRequest;

/// Controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fetching(u32),
    Accumulated(u32),
    Terminated(Termination),
}

pub struct Paginator<'a> {
    fetcher: &'a dyn PageFetcher,
    limiter: PolitenessLimiter,
    options: PaginateOptions,
}

impl<'a> Paginator<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, limiter: PolitenessLimiter, options: PaginateOptions) -> Self {
        Self {
            fetcher,
            limiter,
            options,
        }
    }

    /// Collect at most `cap` reviews from `url` using `adapter`.
    ///
    /// Never fails: every stop condition yields a (possibly empty) outcome.
    pub async fn run(&self, adapter: &SiteAdapter, url: &str, cap: usize) -> ScrapeOutcome {
        let page_limit = if adapter.paginates() {
            self.options.page_limit.clamp(1, DEFAULT_PAGE_LIMIT)
        } else {
            1
        };
        let mut state = PaginationState::new(cap, page_limit);
        let mut requests = 0u32;
        let mut pages_fetched = 0u32;

        info!(adapter = adapter.name(), url, cap, page_limit, "scrape started");

        if state.is_full() {
            return self.finish(state, Termination::CapReached, pages_fetched);
        }
        if self.options.deadline_passed() {
            return self.finish(state, Termination::DeadlineExceeded, pages_fetched);
        }

        let base = if adapter.needs_identifier() {
            match self.resolve_base(adapter, url, &mut requests).await {
                Some(base) => base,
                None => return self.finish(state, Termination::NoIdentifier, pages_fetched),
            }
        } else {
            url.to_string()
        };

        let mut step = Step::Fetching(1);
        loop {
            if self.options.deadline_passed() && !matches!(step, Step::Terminated(_)) {
                step = Step::Terminated(Termination::DeadlineExceeded);
            }

            step = match step {
                Step::Fetching(page) => {
                    state.current_page = page;
                    let request = PageRequest {
                        locator: adapter.locate(&base, page),
                        page_index: page,
                    };
                    if requests > 0 {
                        self.limiter.wait().await;
                    }
                    requests += 1;
                    pages_fetched += 1;
                    self.fetch_page(adapter, &request, &mut state).await
                }
                Step::Accumulated(page) => {
                    if state.is_full() {
                        state.collected.truncate(state.cap);
                        Step::Terminated(Termination::CapReached)
                    } else if page >= state.page_limit {
                        Step::Terminated(Termination::PageLimitReached)
                    } else {
                        Step::Fetching(page + 1)
                    }
                }
                Step::Terminated(reason) => return self.finish(state, reason, pages_fetched),
            };
        }
    }

    /// One fetch + extract. Returns the next step.
    async fn fetch_page(
        &self,
        adapter: &SiteAdapter,
        request: &PageRequest,
        state: &mut PaginationState,
    ) -> Step {
        let result = match self.fetcher.fetch(&request.locator, self.options.timeout).await {
            Ok(result) if result.is_ok() => result,
            Ok(result) => {
                warn!(
                    page = request.page_index,
                    status = result.status_code,
                    locator = %request.locator,
                    "non-200 response"
                );
                return Step::Terminated(Termination::FetchFailed);
            }
            Err(e) => {
                warn!(page = request.page_index, locator = %request.locator, error = %e, "fetch failed");
                return Step::Terminated(Termination::FetchFailed);
            }
        };

        let fragments = adapter.extract(result.text());
        if fragments.is_empty() {
            match block_hint(result.text()) {
                Some(hint) => warn!(page = request.page_index, hint, "empty page, looks blocked"),
                None => debug!(page = request.page_index, "empty page"),
            }
            return Step::Terminated(Termination::EmptyPage);
        }

        let records = normalize_all(&fragments, adapter.source());
        debug!(
            page = request.page_index,
            fragments = fragments.len(),
            records = records.len(),
            "page parsed"
        );
        state.accumulate(records);
        Step::Accumulated(request.page_index)
    }

    /// Base URL with a usable identifier, probing the product page once if the
    /// URL itself does not carry one.
    async fn resolve_base(&self, adapter: &SiteAdapter, url: &str, requests: &mut u32) -> Option<String> {
        if adapter.resolve_identifier(url).is_some() {
            return Some(url.to_string());
        }

        *requests += 1;
        let identifier = match self.fetcher.fetch(url, self.options.timeout).await {
            Ok(result) if result.is_success() => adapter.identifier_from_body(result.text()),
            Ok(result) => {
                debug!(status = result.status_code, "identifier probe rejected");
                None
            }
            Err(e) => {
                debug!(error = %e, "identifier probe failed");
                None
            }
        };

        match identifier {
            Some(id) => {
                debug!(identifier = %id, "identifier found in page body");
                Some(adapter.canonical_base(&id, url))
            }
            None => None,
        }
    }

    fn finish(&self, state: PaginationState, reason: Termination, pages_fetched: u32) -> ScrapeOutcome {
        let outcome = state.finish(reason, pages_fetched);
        info!(
            termination = %outcome.termination,
            records = outcome.records.len(),
            pages = outcome.pages_fetched,
            "scrape finished"
        );
        outcome
    }
}
