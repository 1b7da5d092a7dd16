//! Start-up self-test over a fixed sample corpus.

use std::fmt::Write;

use tweetsent_core::{default_samples, load_samples, AppConfig, ConfigError};
use tweetsent_sentiment::{Classifier, Scorer};

use crate::report;

/// The configured sample corpus, or the built-in one when none is set.
pub(crate) fn resolve_samples(config: &AppConfig) -> Result<Vec<String>, ConfigError> {
    match &config.samples_path {
        Some(path) => load_samples(path).map(|file| file.samples),
        None => Ok(default_samples()),
    }
}

/// Classify every sample and render the numbered results. An unusable
/// samples file is reported and the built-in corpus is used instead.
pub(crate) fn render_self_test<S: Scorer>(config: &AppConfig, classifier: &Classifier<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report::banner("🔍 TESTING SAMPLE TWEETS", 30));

    let samples = resolve_samples(config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "samples file unusable; using built-in samples");
        let _ = writeln!(out, "⚠️  {e}; using built-in samples");
        default_samples()
    });

    for (i, text) in samples.iter().enumerate() {
        let result = classifier.classify(Some(text));
        let _ = writeln!(out, "{}", report::format_sample(i + 1, text, &result));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tweetsent_sentiment::{Label, LexiconScorer};

    use super::*;

    fn config_with_samples(samples_path: Option<PathBuf>) -> AppConfig {
        AppConfig {
            log_level: "info".to_string(),
            input_path: PathBuf::from("in.csv"),
            export_path: PathBuf::from("out.csv"),
            chart_path: PathBuf::from("chart.svg"),
            row_cap: 100,
            text_columns: vec!["text".to_string()],
            display_width: 50,
            samples_path,
        }
    }

    #[test]
    fn defaults_without_samples_path() {
        assert_eq!(
            resolve_samples(&config_with_samples(None)).unwrap(),
            default_samples()
        );
    }

    #[test]
    fn uses_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"samples:\n  - \"only one\"\n").unwrap();
        let config = config_with_samples(Some(file.path().to_path_buf()));
        assert_eq!(resolve_samples(&config).unwrap(), vec!["only one"]);

        let classifier = Classifier::new(LexiconScorer::new());
        let output = render_self_test(&config, &classifier);
        assert!(output.contains("1. only one\n   😐 NEUTRAL (Score: 0.00)\n"));
        assert!(!output.contains("2. "));
    }

    #[test]
    fn falls_back_when_file_missing() {
        let config = config_with_samples(Some(PathBuf::from("/definitely/not/here.yaml")));
        assert!(resolve_samples(&config).is_err());

        let classifier = Classifier::new(LexiconScorer::new());
        let output = render_self_test(&config, &classifier);
        assert!(output.contains("using built-in samples"));
        assert!(output.contains("1. I love this product! It's amazing!"));
    }

    #[test]
    fn built_in_samples_reach_every_label() {
        let classifier = Classifier::new(LexiconScorer::new());
        let labels: Vec<Label> = default_samples()
            .iter()
            .map(|s| classifier.classify(Some(s)).label)
            .collect();
        for label in Label::ALL {
            assert!(labels.contains(&label), "no sample labelled {label}");
        }

        let negative = |text: &str| classifier.classify(Some(text)).label == Label::Negative;
        assert!(negative("will these channels say modi also scared contests"));
        assert!(negative("you will loose your existance election rafel corruption"));
        assert!(negative("\u{2019} confused who said that intellectuals should decision"));
    }
}
