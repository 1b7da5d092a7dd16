//! Batch tallies and extremal records.

use crate::classifier::Classifier;
use crate::scorer::Scorer;
use crate::types::{BatchSummary, Extremes, LabelCounts, ScoredRecord, TextRecord};

/// Classify every record, preserving input order.
pub fn score_records<S: Scorer>(
    classifier: &Classifier<S>,
    records: &[TextRecord],
) -> Vec<ScoredRecord> {
    records
        .iter()
        .map(|record| {
            let result = classifier.classify_cell(&record.raw_text);
            tracing::debug!(
                label = %result.label,
                score = result.score,
                text = %record.truncated_display,
                "scored record"
            );
            ScoredRecord {
                record: record.clone(),
                result,
            }
        })
        .collect()
}

/// Tally labels and pick the best and worst records.
///
/// Ties go to the earliest record: the running extremum only moves on a
/// strictly greater (best) or strictly smaller (worst) score.
#[must_use]
pub fn summarize(scored: &[ScoredRecord]) -> BatchSummary {
    let mut counts = LabelCounts::default();
    let mut best: Option<&ScoredRecord> = None;
    let mut worst: Option<&ScoredRecord> = None;

    for row in scored {
        counts.increment(row.result.label);

        if best.is_none_or(|b| row.result.score > b.result.score) {
            best = Some(row);
        }
        if worst.is_none_or(|w| row.result.score < w.result.score) {
            worst = Some(row);
        }
    }

    let extremes = match (best, worst) {
        (Some(best), Some(worst)) => Some(Extremes {
            best: best.clone(),
            worst: worst.clone(),
        }),
        _ => None,
    };

    BatchSummary {
        counts,
        total: scored.len(),
        extremes,
    }
}

/// Classify `records` and summarize the batch.
pub fn aggregate<S: Scorer>(classifier: &Classifier<S>, records: &[TextRecord]) -> BatchSummary {
    summarize(&score_records(classifier, records))
}
