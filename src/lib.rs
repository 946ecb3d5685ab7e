#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod runtime;
pub mod selectors;
pub mod tools;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{scrape_reviews, scrape_reviews_blocking, scrape_reviews_with, ApiResponse, Components};
pub use config::ScrapeConfig;
pub use error::*;
pub use tools::paginate::{ScrapeOutcome, Termination};
pub use tools::types::{ReviewRecord, ReviewSource};
