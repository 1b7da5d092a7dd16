//! File batch stage: load, classify, report, export.

use std::fmt::Write;

use tweetsent_core::AppConfig;
use tweetsent_sentiment::{
    run_file_analysis, write_chart, write_results, Classifier, LoadOptions, Scorer,
};

use crate::report;

pub(crate) fn load_options(config: &AppConfig) -> LoadOptions {
    LoadOptions {
        preferred_columns: config.text_columns.clone(),
        row_cap: config.row_cap,
        display_width: config.display_width,
    }
}

/// Run the batch pipeline and render its report.
///
/// Failures are rendered as a single error line and do not abort the
/// program; later stages still run.
pub(crate) fn run_batch_stage<S: Scorer>(config: &AppConfig, classifier: &Classifier<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report::banner("📂 ANALYZING FILE", 30));
    if let Err(e) = run_batch(config, classifier, &mut out) {
        tracing::warn!(
            path = %config.input_path.display(),
            error = %e,
            "batch analysis failed"
        );
        let _ = writeln!(out, "❌ Error: {e}");
    }
    out
}

fn run_batch<S: Scorer>(
    config: &AppConfig,
    classifier: &Classifier<S>,
    out: &mut String,
) -> anyhow::Result<()> {
    let analysis = run_file_analysis(classifier, &config.input_path, &load_options(config))?;

    out.push_str(&report::format_batch_report(&analysis.summary));

    write_chart(&config.chart_path, &analysis.summary.counts)?;
    writeln!(out, "📊 Chart: {}", config.chart_path.display())?;

    write_results(&config.export_path, &analysis.rows)?;
    writeln!(out, "💾 Saved: {}", config.export_path.display())?;

    Ok(())
}
