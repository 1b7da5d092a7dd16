//! Polarity-based sentiment labelling for short texts.
//!
//! Scores text with a word lexicon, buckets the polarity into
//! positive/negative/neutral, and aggregates a batch loaded from CSV into
//! label counts plus best/worst records. Results can be exported as CSV and
//! rendered as an SVG bar/pie chart.

pub mod aggregator;
pub mod chart;
pub mod classifier;
pub mod error;
pub mod export;
pub mod loader;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use aggregator::{aggregate, score_records, summarize};
pub use chart::{render_chart_svg, write_chart};
pub use classifier::{label_for_score, Classifier, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use error::SentimentError;
pub use export::write_results;
pub use loader::{load_batch, LoadOptions};
pub use pipeline::{run_file_analysis, BatchAnalysis};
pub use scorer::{lexicon_score, LexiconScorer, Scorer};
pub use types::{
    truncate_display, BatchSummary, CellValue, Extremes, Label, LabelCounts, ScoredRecord,
    SentimentResult, TextRecord,
};
