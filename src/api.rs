use serde::Serialize;
use std::time::Instant;
use tracing::warn;
use url::Url;

use crate::config::ScrapeConfig;
use crate::log::ActivityLogger;
use crate::tools::adapter::select_adapter;
use crate::tools::fetch::{FetchError, PageFetcher};
use crate::tools::paginate::{PaginateOptions, Paginator, PolitenessLimiter, ScrapeOutcome, Termination};
use crate::tools::types::{ReviewRecord, ReviewSource};

/// JSON envelope used by the CLI.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// Activity logging never breaks a scrape.
fn log_info(components: &Components, domain: Option<&str>, event: &str, details: Option<&str>) {
    if let Some(logger) = &components.activity {
        let _ = logger.info(domain, event, details);
    }
}

fn log_error(components: &Components, domain: Option<&str>, event: &str, details: Option<&str>) {
    if let Some(logger) = &components.activity {
        let _ = logger.error(domain, event, details);
    }
}

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Box<dyn PageFetcher>,
    pub limiter: PolitenessLimiter,
    pub options: PaginateOptions,
    pub activity: Option<ActivityLogger>,
}

impl Components {
    /// Components without an activity log.
    pub fn new(fetcher: Box<dyn PageFetcher>, limiter: PolitenessLimiter, options: PaginateOptions) -> Self {
        Self {
            fetcher,
            limiter,
            options,
            activity: None,
        }
    }

    /// Live HTTP components from a config, logging to `~/.revscrape/activity.log`.
    pub fn from_config(config: &ScrapeConfig) -> Result<Self, FetchError> {
        let fetcher = config.fetcher()?;
        Ok(Self {
            fetcher: Box::new(fetcher),
            limiter: config.limiter(),
            options: config.paginate_options(),
            activity: ActivityLogger::new().ok(),
        })
    }

    pub fn with_activity(mut self, logger: ActivityLogger) -> Self {
        self.activity = Some(logger);
        self
    }
}

/* ------------ scrape entrypoints ------------ */

/// Up to `max_reviews` canonical reviews for `url`, with default settings.
///
/// Never fails: an unsupported site, a block page or a dead network all give
/// an empty (or short) list.
///
/// # Examples
/// ```no_run
/// # async fn example() {
/// let reviews = revscrape::scrape_reviews("https://www.flipkart.com/x/product-reviews/y", 50).await;
/// for r in &reviews {
///     println!("{:?} {}", r.rating(), r.text());
/// }
/// # }
/// ```
pub async fn scrape_reviews(url: &str, max_reviews: usize) -> Vec<ReviewRecord> {
    scrape_reviews_with(url, max_reviews, &ScrapeConfig::default())
        .await
        .into_records()
}

/// Like [`scrape_reviews`] but with explicit settings, reporting why the run stopped.
pub async fn scrape_reviews_with(url: &str, max_reviews: usize, config: &ScrapeConfig) -> ScrapeOutcome {
    match Components::from_config(config) {
        Ok(components) => scrape_with_components(url, max_reviews, &components).await,
        Err(e) => {
            warn!(error = %e, "could not build http client");
            ScrapeOutcome {
                records: Vec::new(),
                termination: Termination::FetchFailed,
                pages_fetched: 0,
            }
        }
    }
}

/// Blocking variant of [`scrape_reviews_with`] on the shared runtime.
pub fn scrape_reviews_blocking(url: &str, max_reviews: usize, config: &ScrapeConfig) -> ScrapeOutcome {
    crate::runtime::block_on(scrape_reviews_with(url, max_reviews, config))
}

pub async fn scrape_with_components(url: &str, max_reviews: usize, components: &Components) -> ScrapeOutcome {
    let start_time = Instant::now();
    let domain = host_of(url);
    let adapter = select_adapter(url);

    let paginator = Paginator::new(
        &*components.fetcher,
        components.limiter,
        components.options.clone(),
    );
    let outcome = paginator.run(&adapter, url, max_reviews).await;

    let details = format!(
        "{} reviews, {} pages, {} in {}ms",
        outcome.records.len(),
        outcome.pages_fetched,
        outcome.termination,
        start_time.elapsed().as_millis()
    );
    if outcome.is_empty() {
        log_error(components, domain.as_deref(), "scrape", Some(&details));
    } else {
        log_info(components, domain.as_deref(), "scrape", Some(&details));
    }

    outcome
}

/* ------------ adapter preview ------------ */

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdapterInfo {
    pub adapter: &'static str,
    pub source: ReviewSource,
    pub identifier: Option<String>,
    pub first_page: Option<String>,
}

/// Which adapter a URL maps to and, when resolvable offline, its first review page.
pub fn describe_adapter(url: &str) -> AdapterInfo {
    let adapter = select_adapter(url);
    let identifier = adapter.resolve_identifier(url);
    let first_page = if adapter.needs_identifier() && identifier.is_none() {
        None
    } else {
        Some(adapter.locate(url, 1))
    };
    AdapterInfo {
        adapter: adapter.name(),
        source: adapter.source(),
        identifier,
        first_page,
    }
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}
