use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} has no columns to read text from")]
    NoColumns { path: String },
}
