//! Console formatting for results and batch summaries.

use std::fmt::Write;

use tweetsent_sentiment::{BatchSummary, Label, ScoredRecord, SentimentResult};

/// Section heading followed by an `=` rule.
pub(crate) fn banner(title: &str, width: usize) -> String {
    format!("{title}\n{}", "=".repeat(width))
}

/// `😊 POSITIVE (Score: 0.50)`
pub(crate) fn format_result(result: &SentimentResult) -> String {
    format!(
        "{} {} (Score: {:.2})",
        result.label.emoji(),
        result.label.as_str().to_uppercase(),
        result.score
    )
}

/// Numbered self-test entry, with a trailing blank line.
pub(crate) fn format_sample(index: usize, text: &str, result: &SentimentResult) -> String {
    format!("{index}. {text}\n   {}\n", format_result(result))
}

fn format_label_line(summary: &BatchSummary, label: Label) -> String {
    let count = summary.counts.get(label);
    match summary.percentage(label) {
        Some(pct) => format!("{}: {count} ({pct:.1}%)", label.display_name()),
        None => format!("{}: {count}", label.display_name()),
    }
}

fn format_extreme(prefix: &str, row: &ScoredRecord) -> String {
    format!(
        "{prefix}: {} (Score: {:.2})",
        row.record.truncated_display, row.result.score
    )
}

/// Counts, percentages and best/worst records for one batch.
pub(crate) fn format_batch_report(summary: &BatchSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✅ Analyzed {} tweets", summary.total);
    for label in Label::ALL {
        let _ = writeln!(out, "{}", format_label_line(summary, label));
    }
    out.push('\n');
    match (summary.best(), summary.worst()) {
        (Some(best), Some(worst)) => {
            let _ = writeln!(out, "{}", format_extreme("💚 Best", best));
            let _ = writeln!(out, "{}", format_extreme("💔 Worst", worst));
        }
        _ => out.push_str("No data: best/worst undefined\n"),
    }
    out
}
