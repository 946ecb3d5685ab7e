use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tools::types::ReviewRecord;

/// Raw classifier output for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f32,
}

impl Sentiment {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Anything mentioning `NEG` is negative; every other label is positive.
    pub fn from_raw(label: &str) -> Self {
        if label.to_ascii_uppercase().contains("NEG") {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
        }
    }
}

/// A record with its sentiment attached (same index as the input).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledReview {
    pub record: ReviewRecord,
    pub label: SentimentLabel,
    pub score: f32,
}

/// Aggregate sentiment counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
}

impl Metrics {
    pub fn empty() -> Self {
        Self {
            total: 0,
            positive: 0,
            negative: 0,
            positive_pct: 0.0,
            negative_pct: 0.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("classifier returned {got} results for {expected} texts")]
    LengthMismatch { expected: usize, got: usize },
    #[error("collaborator failed: {0}")]
    Collaborator(String),
}
