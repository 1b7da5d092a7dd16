//! CSV batch loading.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::SentimentError;
use crate::types::{CellValue, TextRecord};

/// Cell contents treated as missing, in addition to empty cells. Matched
/// exactly: padded markers stay text.
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Column names tried in order; the first present wins, else column 0.
    pub preferred_columns: Vec<String>,
    /// Maximum number of non-missing cells to keep.
    pub row_cap: usize,
    /// Character width for [`TextRecord::truncated_display`].
    pub display_width: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            preferred_columns: vec![
                "text".to_string(),
                "tweet".to_string(),
                "content".to_string(),
            ],
            row_cap: 100,
            display_width: 50,
        }
    }
}

/// Read the text column of a CSV file into records.
///
/// Missing cells (empty, or exactly an NA marker) are skipped and do not
/// count toward `row_cap`; whitespace-only cells are kept. When every
/// kept cell parses as a number the column is treated as non-text.
///
/// # Errors
///
/// Returns [`SentimentError`] if the file cannot be opened, is not valid CSV,
/// or has no header columns.
pub fn load_batch(path: &Path, options: &LoadOptions) -> Result<Vec<TextRecord>, SentimentError> {
    let display_path = path.display().to_string();
    let file = File::open(path).map_err(|e| SentimentError::Io {
        path: display_path.clone(),
        source: e,
    })?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let csv_err = |source: csv::Error| SentimentError::Csv {
        path: display_path.clone(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let column_idx = select_column(&headers, &options.preferred_columns).ok_or_else(|| {
        SentimentError::NoColumns {
            path: display_path.clone(),
        }
    })?;

    tracing::info!(
        path = %display_path,
        column = headers.get(column_idx).unwrap_or_default(),
        "selected text column"
    );

    let mut cells: Vec<String> = Vec::new();
    for row in reader.records() {
        if cells.len() >= options.row_cap {
            tracing::info!(row_cap = options.row_cap, "row cap reached; ignoring remaining rows");
            break;
        }
        let row = row.map_err(csv_err)?;
        match row.get(column_idx) {
            Some(cell) if !is_missing(cell) => cells.push(cell.to_string()),
            _ => {}
        }
    }

    let numeric = !cells.is_empty() && cells.iter().all(|c| c.trim().parse::<f64>().is_ok());
    if numeric {
        tracing::warn!(
            path = %display_path,
            "selected column holds only numbers; rows will be classified neutral"
        );
    }

    let records = cells
        .into_iter()
        .map(|cell| {
            let value = if numeric {
                CellValue::NonText(cell)
            } else {
                CellValue::Text(cell)
            };
            TextRecord::new(value, options.display_width)
        })
        .collect();

    Ok(records)
}

fn select_column(headers: &csv::StringRecord, preferred: &[String]) -> Option<usize> {
    if headers.is_empty() {
        return None;
    }
    preferred
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name))
        .or(Some(0))
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || NA_MARKERS.contains(&cell)
}
