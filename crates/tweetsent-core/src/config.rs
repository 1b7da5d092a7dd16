use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Zero would disable the batch stage or truncate every tweet to "...".
    let parse_positive = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let log_level = or_default("TWEETSENT_LOG_LEVEL", "info");

    let input_path = PathBuf::from(or_default(
        "TWEETSENT_INPUT_PATH",
        "./data/Twitter_Data.csv",
    ));
    let export_path = PathBuf::from(or_default("TWEETSENT_EXPORT_PATH", "simple_results.csv"));
    let chart_path = PathBuf::from(or_default("TWEETSENT_CHART_PATH", "sentiment_chart.svg"));

    let row_cap = parse_positive("TWEETSENT_ROW_CAP", "100")?;
    let display_width = parse_positive("TWEETSENT_DISPLAY_WIDTH", "50")?;

    let text_columns = parse_column_list(&or_default("TWEETSENT_TEXT_COLUMNS", "text,tweet,content"));
    if text_columns.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TWEETSENT_TEXT_COLUMNS".to_string(),
            reason: "at least one column name is required".to_string(),
        });
    }

    let samples_path = lookup("TWEETSENT_SAMPLES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        log_level,
        input_path,
        export_path,
        chart_path,
        row_cap,
        text_columns,
        display_width,
        samples_path,
    })
}

/// Split a comma-separated column list, dropping blank entries.
fn parse_column_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
