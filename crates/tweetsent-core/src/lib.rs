//! Shared configuration for the tweet sentiment analyzer.
//!
//! Reads runtime settings from the environment (with `.env` support) and
//! loads the optional YAML sample corpus used by the self-test.

pub mod app_config;
pub mod config;
pub mod samples;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use samples::{default_samples, load_samples, SamplesFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read samples file {path}: {source}")]
    SamplesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse samples file: {0}")]
    SamplesFileParse(#[source] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
