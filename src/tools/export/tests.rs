#[cfg(test)]
mod tests {
    use crate::tools::analyze::{metrics_for, LabeledReview, SentimentLabel};
    use crate::tools::export::*;
    use crate::tools::normalize::normalize;
    use crate::tools::types::{RawFragment, RawRating, ReviewSource};

    fn record(text: &str, rating: Option<f32>) -> crate::ReviewRecord {
        normalize(
            &RawFragment::new(text, rating.map(RawRating::Parsed)),
            ReviewSource::Flipkart,
        )
        .expect("record")
    }

    #[test]
    fn test_csv_header() {
        let csv = to_csv(&[]).expect("csv");
        assert_eq!(csv.lines().next(), Some("text,rating,label,score,source"));
    }

    #[test]
    fn test_csv_unlabeled_rows() {
        let rows = rows_from_records(&[record("Good, but loud", Some(4.0)), record("ok", None)]);
        let csv = to_csv(&rows).expect("csv");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "\"Good, but loud\",4.0,,,flipkart");
        assert_eq!(lines[2], "ok,,,,flipkart");
    }

    #[test]
    fn test_csv_labeled_rows() {
        let labeled = vec![LabeledReview {
            record: record("Leaks from the spout", Some(1.0)),
            label: SentimentLabel::Negative,
            score: 0.5,
        }];
        let csv = to_csv(&rows_from_labeled(&labeled)).expect("csv");
        assert_eq!(
            csv.lines().nth(1),
            Some("Leaks from the spout,1.0,NEGATIVE,0.5,flipkart")
        );
    }

    #[test]
    fn test_metrics_json_shape() {
        let labeled = vec![
            LabeledReview {
                record: record("fine", None),
                label: SentimentLabel::Positive,
                score: 0.9,
            },
            LabeledReview {
                record: record("awful", None),
                label: SentimentLabel::Negative,
                score: 0.8,
            },
            LabeledReview {
                record: record("nice", None),
                label: SentimentLabel::Positive,
                score: 0.7,
            },
        ];
        let json = metrics_json(&metrics_for(&labeled)).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["total"], 3);
        assert_eq!(value["positive"], 2);
        assert_eq!(value["negative"], 1);
        assert_eq!(value["positive_pct"], 66.67);
        assert_eq!(value["negative_pct"], 33.33);
    }
}
