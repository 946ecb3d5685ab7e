//! Analysis Tools
//!
//! Sentiment labelling, summarization and word clouds are done by external
//! models. This module owns their input/output contracts: which text goes in,
//! in which order, and how results come back onto the records.

mod tests;
pub mod types;
mod utils;

pub use types::*;

use std::collections::HashMap;

use crate::tools::types::ReviewRecord;

/// Default character budget for summarizer input.
pub const SUMMARY_CHAR_BUDGET: usize = 4000;

pub const NO_REVIEWS_SUMMARY: &str = "No reviews to summarize.";

/// Batch sentiment model. Must return one result per input text, in order.
pub trait SentimentClassifier {
    fn classify(&self, texts: &[String]) -> Result<Vec<Sentiment>, AnalyzeError>;
}

/// Text summarization model.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<String, AnalyzeError>;
}

/// Label every record and compute aggregate metrics.
///
/// The classifier sees exactly `record.text()` for each record, in order, so
/// results re-attach by index. Empty input skips the classifier.
pub fn label_reviews(
    records: &[ReviewRecord],
    classifier: &dyn SentimentClassifier,
) -> Result<(Vec<LabeledReview>, Metrics), AnalyzeError> {
    if records.is_empty() {
        return Ok((Vec::new(), Metrics::empty()));
    }

    let texts: Vec<String> = records.iter().map(|r| r.text().to_string()).collect();
    let predictions = classifier.classify(&texts)?;
    if predictions.len() != records.len() {
        return Err(AnalyzeError::LengthMismatch {
            expected: records.len(),
            got: predictions.len(),
        });
    }

    let labeled: Vec<LabeledReview> = records
        .iter()
        .zip(predictions)
        .map(|(record, prediction)| LabeledReview {
            record: record.clone(),
            label: SentimentLabel::from_raw(&prediction.label),
            score: prediction.score,
        })
        .collect();

    let metrics = metrics_for(&labeled);
    Ok((labeled, metrics))
}

/// Counts and two-decimal percentages for labelled reviews.
pub fn metrics_for(labeled: &[LabeledReview]) -> Metrics {
    let total = labeled.len();
    let negative = labeled
        .iter()
        .filter(|r| r.label == SentimentLabel::Negative)
        .count();
    let positive = total - negative;
    Metrics {
        total,
        positive,
        negative,
        positive_pct: utils::pct(positive, total),
        negative_pct: utils::pct(negative, total),
    }
}

/// Review texts joined by single spaces, cut to `max_chars` characters.
pub fn summary_input<S: AsRef<str>>(texts: &[S], max_chars: usize) -> String {
    let joined = join_texts(texts);
    utils::truncate_chars(&joined, max_chars).to_string()
}

/// Summarize reviews. Never fails: problems come back as the summary text.
pub fn summarize_reviews<S: AsRef<str>>(texts: &[S], summarizer: &dyn Summarizer) -> String {
    if texts.is_empty() {
        return NO_REVIEWS_SUMMARY.to_string();
    }
    let input = summary_input(texts, SUMMARY_CHAR_BUDGET);
    match summarizer.summarize(&input) {
        Ok(summary) => summary.trim().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "summarizer failed");
            format!("Summarization failed: {e}")
        }
    }
}

/// Joined text for the word-cloud renderer, `None` if there is nothing to draw.
pub fn wordcloud_text<S: AsRef<str>>(texts: &[S]) -> Option<String> {
    let joined = join_texts(texts);
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Top `max_words` content words with counts, most frequent first.
///
/// Ties are ordered alphabetically so the output is stable.
pub fn word_frequencies(text: &str, max_words: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in utils::content_words(text) {
        *counts.entry(word).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);
    ranked
}

fn join_texts<S: AsRef<str>>(texts: &[S]) -> String {
    texts
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
