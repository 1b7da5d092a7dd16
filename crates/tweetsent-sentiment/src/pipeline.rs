//! Batch pipeline orchestration.

use std::path::Path;

use crate::aggregator::{score_records, summarize};
use crate::classifier::Classifier;
use crate::error::SentimentError;
use crate::loader::{load_batch, LoadOptions};
use crate::scorer::Scorer;
use crate::types::{BatchSummary, ScoredRecord};

/// Per-row results and their summary for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchAnalysis {
    /// One entry per input record, in input order.
    pub rows: Vec<ScoredRecord>,
    pub summary: BatchSummary,
}

/// Run the batch pipeline for one file.
///
/// 1. Load up to `options.row_cap` non-missing cells of the text column.
/// 2. Classify every record.
/// 3. Summarize label counts and best/worst records.
///
/// An input with a header but no rows yields an empty summary, not an error.
///
/// # Errors
///
/// Returns [`SentimentError`] if the file cannot be read or has no columns.
pub fn run_file_analysis<S: Scorer>(
    classifier: &Classifier<S>,
    path: &Path,
    options: &LoadOptions,
) -> Result<BatchAnalysis, SentimentError> {
    let records = load_batch(path, options)?;

    if records.is_empty() {
        tracing::info!(path = %path.display(), "no rows to analyze");
    }

    let rows = score_records(classifier, &records);
    let summary = summarize(&rows);

    tracing::info!(
        path = %path.display(),
        total = summary.total,
        positive = summary.counts.positive,
        negative = summary.counts.negative,
        neutral = summary.counts.neutral,
        "batch analyzed"
    );

    Ok(BatchAnalysis { rows, summary })
}
