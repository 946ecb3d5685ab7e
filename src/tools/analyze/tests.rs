#[cfg(test)]
mod tests {
    use crate::tools::analyze::*;
    use crate::tools::normalize::normalize_all;
    use crate::tools::types::{RawFragment, ReviewRecord, ReviewSource};
    use std::cell::RefCell;

    /// Labels texts containing "bad" as negative and remembers its input.
    struct KeywordClassifier {
        seen: RefCell<Vec<String>>,
    }

    impl SentimentClassifier for KeywordClassifier {
        fn classify(&self, texts: &[String]) -> Result<Vec<Sentiment>, AnalyzeError> {
            self.seen.borrow_mut().extend(texts.iter().cloned());
            Ok(texts
                .iter()
                .map(|t| {
                    if t.contains("bad") {
                        Sentiment::new("NEGATIVE", 0.91)
                    } else {
                        Sentiment::new("POSITIVE", 0.99)
                    }
                })
                .collect())
        }
    }

    struct ShortClassifier;

    impl SentimentClassifier for ShortClassifier {
        fn classify(&self, _texts: &[String]) -> Result<Vec<Sentiment>, AnalyzeError> {
            Ok(vec![Sentiment::new("LABEL_1", 0.5)])
        }
    }

    struct EchoSummarizer;

    impl Summarizer for EchoSummarizer {
        fn summarize(&self, text: &str) -> Result<String, AnalyzeError> {
            Ok(format!("  {} chars  ", text.chars().count()))
        }
    }

    struct BrokenSummarizer;

    impl Summarizer for BrokenSummarizer {
        fn summarize(&self, _text: &str) -> Result<String, AnalyzeError> {
            Err(AnalyzeError::Collaborator("model not loaded".into()))
        }
    }

    fn records(texts: &[&str]) -> Vec<ReviewRecord> {
        let fragments: Vec<RawFragment> = texts.iter().map(|t| RawFragment::text_only(*t)).collect();
        normalize_all(&fragments, ReviewSource::Amazon)
    }

    #[test]
    fn test_label_reviews_in_order() {
        let classifier = KeywordClassifier {
            seen: RefCell::new(Vec::new()),
        };
        let input = records(&["great kettle", "bad lid", "works fine"]);

        let (labeled, metrics) = label_reviews(&input, &classifier).expect("labels");

        assert_eq!(
            *classifier.seen.borrow(),
            vec!["great kettle", "bad lid", "works fine"]
        );
        assert_eq!(labeled[1].record.text(), "bad lid");
        assert_eq!(labeled[1].label, SentimentLabel::Negative);
        assert_eq!(labeled[0].label, SentimentLabel::Positive);
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.positive, 2);
        assert_eq!(metrics.negative, 1);
        assert_eq!(metrics.positive_pct, 66.67);
        assert_eq!(metrics.negative_pct, 33.33);
    }

    #[test]
    fn test_label_reviews_empty_skips_classifier() {
        let classifier = KeywordClassifier {
            seen: RefCell::new(Vec::new()),
        };
        let (labeled, metrics) = label_reviews(&[], &classifier).expect("labels");
        assert!(labeled.is_empty());
        assert_eq!(metrics, Metrics::empty());
        assert!(classifier.seen.borrow().is_empty());
    }

    #[test]
    fn test_label_reviews_length_mismatch() {
        let input = records(&["one", "two"]);
        let err = label_reviews(&input, &ShortClassifier).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::LengthMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_sentiment_label_mapping() {
        assert_eq!(SentimentLabel::from_raw("NEGATIVE"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_raw("neg"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_raw("POSITIVE"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_raw("LABEL_1"), SentimentLabel::Positive);
    }

    #[test]
    fn test_summary_input_joins_and_caps() {
        assert_eq!(summary_input(&["a", "b", "c"], 100), "a b c");
        let long = vec!["x".repeat(3000), "y".repeat(3000)];
        let input = summary_input(&long, SUMMARY_CHAR_BUDGET);
        assert_eq!(input.chars().count(), SUMMARY_CHAR_BUDGET);
        assert!(input.starts_with('x'));
        assert!(input.ends_with('y'));
    }

    #[test]
    fn test_summarize_reviews() {
        let empty: [&str; 0] = [];
        assert_eq!(summarize_reviews(&empty, &EchoSummarizer), NO_REVIEWS_SUMMARY);
        assert_eq!(summarize_reviews(&["ab", "cd"], &EchoSummarizer), "5 chars");
        assert_eq!(
            summarize_reviews(&["ab"], &BrokenSummarizer),
            "Summarization failed: collaborator failed: model not loaded"
        );
    }

    #[test]
    fn test_wordcloud_text() {
        assert_eq!(wordcloud_text(&["  ", ""]), None);
        assert_eq!(wordcloud_text(&["hot", "tea"]), Some("hot tea".to_string()));
    }

    #[test]
    fn test_word_frequencies() {
        let freq = word_frequencies("lid lid handle cord handle lid the and", 2);
        assert_eq!(
            freq,
            vec![("lid".to_string(), 3), ("handle".to_string(), 2)]
        );
        let ties = word_frequencies("zeta alpha", 5);
        assert_eq!(ties, vec![("alpha".to_string(), 1), ("zeta".to_string(), 1)]);
    }
}
