use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, RevscrapeError};
use crate::tools::fetch::{FetchError, HttpFetcher, DEFAULT_ACCEPT_LANGUAGE};
use crate::tools::identity::{default_pool, IdentityRotator};
use crate::tools::paginate::{
    PaginateOptions, PolitenessLimiter, DEFAULT_PAGE_LIMIT, DEFAULT_POLITENESS_DELAY_MS,
    DEFAULT_TIMEOUT_MS,
};

const CONFIG_FILE: &str = "config.json";

/// Tunables for one scrape run. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub timeout_ms: u64,
    pub politeness_delay_ms: u64,
    /// Lowers the 25-page ceiling; larger values are clamped.
    pub page_limit: u32,
    pub accept_language: String,
    pub user_agents: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            politeness_delay_ms: DEFAULT_POLITENESS_DELAY_MS,
            page_limit: DEFAULT_PAGE_LIMIT,
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            user_agents: default_pool(),
            seed: None,
        }
    }
}

impl ScrapeConfig {
    /// Load from `path`, or from the per-user config dir when `path` is `None`.
    ///
    /// A missing file in the config dir means defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => match default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| RevscrapeError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| RevscrapeError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn identity(&self) -> IdentityRotator {
        IdentityRotator::new(self.user_agents.clone(), self.seed)
    }

    pub fn limiter(&self) -> PolitenessLimiter {
        PolitenessLimiter::new(Duration::from_millis(self.politeness_delay_ms))
    }

    pub fn paginate_options(&self) -> PaginateOptions {
        PaginateOptions {
            page_limit: self.page_limit.min(DEFAULT_PAGE_LIMIT),
            timeout: Duration::from_millis(self.timeout_ms),
            deadline: None,
        }
    }

    pub fn fetcher(&self) -> std::result::Result<HttpFetcher, FetchError> {
        HttpFetcher::new(self.identity(), self.accept_language.clone())
    }
}

/// `<config dir>/revscrape/config.json`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "revscrape", "revscrape").map(|p| p.config_dir().join(CONFIG_FILE))
}
