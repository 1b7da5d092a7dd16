//! Polarity thresholding.

use crate::scorer::Scorer;
use crate::types::{CellValue, Label, SentimentResult};

/// Scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Map a polarity score to a label. Both thresholds are exclusive, so
/// `0.1` and `-0.1` are neutral.
#[must_use]
pub fn label_for_score(score: f64) -> Label {
    if score > POSITIVE_THRESHOLD {
        Label::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}

/// Labels text using a [`Scorer`].
///
/// Holds no mutable state; `&Classifier` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier<S> {
    scorer: S,
}

impl<S: Scorer> Classifier<S> {
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Classify optional text. Missing or empty text is neutral with a
    /// score of `0.0` and never reaches the scorer.
    pub fn classify(&self, text: Option<&str>) -> SentimentResult {
        match text {
            Some(t) if !t.is_empty() => {
                let score = self.scorer.score(t);
                SentimentResult {
                    label: label_for_score(score),
                    score,
                }
            }
            _ => SentimentResult::NEUTRAL_ZERO,
        }
    }

    /// Classify a table cell. Non-text cells are neutral with a score of `0.0`.
    pub fn classify_cell(&self, cell: &CellValue) -> SentimentResult {
        self.classify(cell.as_text())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Returns a fixed score per exact text, `0.0` otherwise, and counts calls.
    #[derive(Default)]
    struct FakeScorer {
        scores: HashMap<&'static str, f64>,
        calls: AtomicUsize,
    }

    impl FakeScorer {
        fn with(pairs: &[(&'static str, f64)]) -> Self {
            Self {
                scores: pairs.iter().copied().collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Scorer for FakeScorer {
        fn score(&self, text: &str) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.scores.get(text).copied().unwrap_or(0.0)
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(label_for_score(0.1), Label::Neutral);
        assert_eq!(label_for_score(-0.1), Label::Neutral);
        assert_eq!(label_for_score(0.0), Label::Neutral);
        assert_eq!(label_for_score(0.100_000_1), Label::Positive);
        assert_eq!(label_for_score(-0.100_000_1), Label::Negative);
        assert_eq!(label_for_score(1.0), Label::Positive);
        assert_eq!(label_for_score(-1.0), Label::Negative);
    }

    #[test]
    fn label_matches_threshold_rule_across_range() {
        for step in -100_i32..=100 {
            let score = f64::from(step) / 100.0;
            let expected = if score > 0.1 {
                Label::Positive
            } else if score < -0.1 {
                Label::Negative
            } else {
                Label::Neutral
            };
            assert_eq!(label_for_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn text_scoring_exactly_point_one_is_neutral() {
        let classifier = Classifier::new(FakeScorer::with(&[("meh", 0.1)]));
        let result = classifier.classify(Some("meh"));
        assert_eq!(result.label, Label::Neutral);
        assert_eq!(result.score, 0.1);
    }

    #[test]
    fn none_is_neutral_zero_without_scoring() {
        let classifier = Classifier::new(FakeScorer::with(&[]));
        assert_eq!(classifier.classify(None), SentimentResult::NEUTRAL_ZERO);
        assert_eq!(classifier.scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_is_neutral_zero_without_scoring() {
        let classifier = Classifier::new(FakeScorer::with(&[("", 0.9)]));
        assert_eq!(classifier.classify(Some("")), SentimentResult::NEUTRAL_ZERO);
        assert_eq!(classifier.scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_text_cell_is_neutral_zero_without_scoring() {
        let classifier = Classifier::new(FakeScorer::with(&[("42", 0.9)]));
        let result = classifier.classify_cell(&CellValue::NonText("42".to_string()));
        assert_eq!(result, SentimentResult::NEUTRAL_ZERO);
        assert_eq!(classifier.scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn score_is_passed_through_unvalidated() {
        let classifier = Classifier::new(FakeScorer::with(&[("wild", 3.5)]));
        let result = classifier.classify(Some("wild"));
        assert_eq!(result.label, Label::Positive);
        assert_eq!(result.score, 3.5);
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        let classifier = Classifier::new(FakeScorer::with(&[("up", 0.5), ("down", -0.5)]));
        std::thread::scope(|s| {
            let a = s.spawn(|| classifier.classify(Some("up")).label);
            let b = s.spawn(|| classifier.classify(Some("down")).label);
            assert_eq!(a.join().unwrap(), Label::Positive);
            assert_eq!(b.join().unwrap(), Label::Negative);
        });
    }
}
