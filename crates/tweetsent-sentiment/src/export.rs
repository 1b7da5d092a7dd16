//! Per-row results export.

use std::path::Path;

use serde::Serialize;

use crate::error::SentimentError;
use crate::types::ScoredRecord;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    tweet: &'a str,
    sentiment: &'static str,
    score: f64,
}

/// Write `tweet,sentiment,score` rows in input order. Scores keep full precision.
///
/// # Errors
///
/// Returns [`SentimentError`] if the file cannot be created or written.
pub fn write_results(path: &Path, rows: &[ScoredRecord]) -> Result<(), SentimentError> {
    let display_path = path.display().to_string();
    let csv_err = |source: csv::Error| SentimentError::Csv {
        path: display_path.clone(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    if rows.is_empty() {
        // serialize() writes the header lazily; an empty batch still gets one.
        writer
            .write_record(["tweet", "sentiment", "score"])
            .map_err(csv_err)?;
    }
    for row in rows {
        writer
            .serialize(ExportRow {
                tweet: &row.record.truncated_display,
                sentiment: row.result.label.as_str(),
                score: row.result.score,
            })
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|e| SentimentError::Io {
        path: display_path.clone(),
        source: e,
    })?;

    tracing::info!(path = %display_path, rows = rows.len(), "wrote results export");
    Ok(())
}
