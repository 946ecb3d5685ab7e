//! Export Tools

mod tests;

use serde::Serialize;
use thiserror::Error;

use crate::tools::analyze::{LabeledReview, Metrics};
use crate::tools::types::{ReviewRecord, ReviewSource};

/// Column order of the tabular export.
pub const CSV_COLUMNS: [&str; 5] = ["text", "rating", "label", "score", "source"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("csv buffer: {0}")]
    Buffer(String),
}

/// One row of the tabular export. Label and score are empty until labelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    pub text: String,
    pub rating: Option<f32>,
    pub label: Option<String>,
    pub score: Option<f32>,
    pub source: ReviewSource,
}

impl From<&ReviewRecord> for ReviewRow {
    fn from(record: &ReviewRecord) -> Self {
        Self {
            text: record.text().to_string(),
            rating: record.rating(),
            label: None,
            score: None,
            source: record.source(),
        }
    }
}

impl From<&LabeledReview> for ReviewRow {
    fn from(labeled: &LabeledReview) -> Self {
        Self {
            label: Some(labeled.label.as_str().to_string()),
            score: Some(labeled.score),
            ..Self::from(&labeled.record)
        }
    }
}

/// Rows for bare records, in order.
pub fn rows_from_records(records: &[ReviewRecord]) -> Vec<ReviewRow> {
    records.iter().map(ReviewRow::from).collect()
}

/// Rows for labelled records, in order.
pub fn rows_from_labeled(labeled: &[LabeledReview]) -> Vec<ReviewRow> {
    labeled.iter().map(ReviewRow::from).collect()
}

/// Render rows as CSV with a `text,rating,label,score,source` header.
///
/// The header is written even when there are no rows.
pub fn to_csv(rows: &[ReviewRow]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    writer.write_record(CSV_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Pretty JSON metrics object.
pub fn metrics_json(metrics: &Metrics) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(metrics)?)
}
