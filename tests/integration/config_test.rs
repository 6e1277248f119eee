use std::fs;

use monkey_viewer::core::config::{ViewerConfig, DEFAULT_BASE_URL};
use monkey_viewer::core::svg::SvgPolicy;
use tempfile::TempDir;

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = ViewerConfig::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("monkey-viewer").join("config.json");

    let mut config = ViewerConfig::default();
    config.set_value("data_dir", "/srv/monkey_data").unwrap();
    config.set_value("svg_policy", "sanitize").unwrap();
    config.set_value("refresh_interval_secs", "30").unwrap();
    config.save_to(&path).unwrap();

    let loaded = ViewerConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.svg_policy, SvgPolicy::Sanitize);
    assert_eq!(loaded.refresh_interval_secs, 30);
}

#[test]
fn test_config_corrupt_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ this is not json").unwrap();

    let config = ViewerConfig::load_from(&path).unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_config_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "   \n").unwrap();

    assert_eq!(
        ViewerConfig::load_from(&path).unwrap(),
        ViewerConfig::default()
    );
}

#[test]
fn test_saved_file_is_readable_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    ViewerConfig::default().save_to(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["base_url"], DEFAULT_BASE_URL);
    assert_eq!(raw["svg_policy"], "trust");
    assert_eq!(raw["refresh_interval_secs"], 60);
}
