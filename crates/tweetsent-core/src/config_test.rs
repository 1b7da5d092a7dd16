use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.input_path, PathBuf::from("./data/Twitter_Data.csv"));
    assert_eq!(cfg.export_path, PathBuf::from("simple_results.csv"));
    assert_eq!(cfg.chart_path, PathBuf::from("sentiment_chart.svg"));
    assert_eq!(cfg.row_cap, 100);
    assert_eq!(cfg.display_width, 50);
    assert_eq!(cfg.text_columns, vec!["text", "tweet", "content"]);
    assert!(cfg.samples_path.is_none());
}

#[test]
fn row_cap_override() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_ROW_CAP", "250");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.row_cap, 250);
}

#[test]
fn row_cap_invalid() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_ROW_CAP", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TWEETSENT_ROW_CAP"),
        "expected InvalidEnvVar(TWEETSENT_ROW_CAP), got: {result:?}"
    );
}

#[test]
fn row_cap_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_ROW_CAP", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, ref reason }) if var == "TWEETSENT_ROW_CAP" && reason.contains("at least 1")),
        "expected InvalidEnvVar(TWEETSENT_ROW_CAP), got: {result:?}"
    );
}

#[test]
fn display_width_override() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_DISPLAY_WIDTH", "80");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.display_width, 80);
}

#[test]
fn text_columns_are_trimmed_and_blank_entries_dropped() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_TEXT_COLUMNS", " body , ,message,");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.text_columns, vec!["body", "message"]);
}

#[test]
fn text_columns_all_blank_rejected() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_TEXT_COLUMNS", " , ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TWEETSENT_TEXT_COLUMNS"),
        "expected InvalidEnvVar(TWEETSENT_TEXT_COLUMNS), got: {result:?}"
    );
}

#[test]
fn samples_path_set() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_SAMPLES_PATH", "./config/samples.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.samples_path,
        Some(PathBuf::from("./config/samples.yaml"))
    );
}

#[test]
fn samples_path_blank_is_none() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_SAMPLES_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.samples_path.is_none());
}

#[test]
fn paths_override() {
    let mut map = HashMap::new();
    map.insert("TWEETSENT_INPUT_PATH", "/tmp/in.csv");
    map.insert("TWEETSENT_EXPORT_PATH", "/tmp/out.csv");
    map.insert("TWEETSENT_CHART_PATH", "/tmp/chart.svg");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.input_path, PathBuf::from("/tmp/in.csv"));
    assert_eq!(cfg.export_path, PathBuf::from("/tmp/out.csv"));
    assert_eq!(cfg.chart_path, PathBuf::from("/tmp/chart.svg"));
}
