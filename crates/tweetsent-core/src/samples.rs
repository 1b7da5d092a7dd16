//! Sample corpus for the start-up self-test.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Built-in sample tweets, used when no samples file is configured.
const DEFAULT_SAMPLES: &[&str] = &[
    "I love this product! It's amazing!",
    "This is terrible. Worst experience ever.",
    "It's okay, nothing special.",
    "Best day ever! So happy! 😊",
    "I hate waiting in long lines.",
    "The weather is nice today.",
    "This app is fantastic and easy to use!",
    "Disappointed with the service quality.",
    "Not bad, could be better though.",
    "anchor doing canvas against modi not fit for journery",
    "slams makers biopic for deliberately using name the god of te ganga",
    "will these channels say modi also scared contests",
    "I am so excited for the new movie release!",
    "This is the worst book I've ever read.",
    "this new india this indias century because has the most powerful leader in the world",
    "100 sure sir will inform all family and friends",
    "you will loose your existance election rafel corruption",
    "\u{2018}concierge\u{2019} for super rich makes unusual sight",
    "\u{2019} confused who said that intellectuals should decision",
    "asked learn from how treat minority well does want",
    "for new india can vote for shri narendra modi",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplesFile {
    pub samples: Vec<String>,
}

/// The built-in sample corpus.
#[must_use]
pub fn default_samples() -> Vec<String> {
    DEFAULT_SAMPLES.iter().map(|s| (*s).to_string()).collect()
}

/// Load and validate a sample corpus from a YAML file of the form
/// `samples: ["...", "..."]`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_samples(path: &Path) -> Result<SamplesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SamplesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let samples_file: SamplesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::SamplesFileParse)?;

    validate_samples(&samples_file)?;

    tracing::debug!(
        path = %path.display(),
        count = samples_file.samples.len(),
        "loaded sample corpus"
    );

    Ok(samples_file)
}

fn validate_samples(samples_file: &SamplesFile) -> Result<(), ConfigError> {
    if samples_file.samples.is_empty() {
        return Err(ConfigError::Validation(
            "samples list must be non-empty".to_string(),
        ));
    }

    if let Some(idx) = samples_file
        .samples
        .iter()
        .position(|s| s.trim().is_empty())
    {
        return Err(ConfigError::Validation(format!(
            "sample #{} is blank",
            idx + 1
        )));
    }

    Ok(())
}
