use thiserror::Error;

pub type Result<T> = std::result::Result<T, RevscrapeError>;

/// Crate-level error for the ambient surfaces (config, activity log, export).
///
/// Scraping itself never fails: termination reasons are values, see
/// [`crate::tools::paginate::Termination`].
#[derive(Debug, Error)]
pub enum RevscrapeError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("could not resolve {0} directory")]
    MissingDir(&'static str),
    #[error("invalid config {path}: {reason}")]
    Config { path: String, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Export(#[from] crate::tools::export::ExportError),
    #[error("{0}")]
    Other(String),
}
