use std::path::PathBuf;

/// Runtime settings for one analyzer run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// CSV file consumed by the batch stage.
    pub input_path: PathBuf,
    /// Destination of the `tweet,sentiment,score` export.
    pub export_path: PathBuf,
    /// Destination of the SVG bar/pie chart.
    pub chart_path: PathBuf,
    /// Maximum number of non-missing rows read from the input.
    pub row_cap: usize,
    /// Preferred text column names, in priority order.
    pub text_columns: Vec<String>,
    /// Character width above which display text is truncated.
    pub display_width: usize,
    /// Optional YAML override for the self-test corpus.
    pub samples_path: Option<PathBuf>,
}
