// Tests for the command helpers shared by watch/show/export

use clap::{Arg, Command};
use monkey_viewer::commands::{apply_overrides, build_source, build_viewer, source_args};
use monkey_viewer::core::config::ViewerConfig;
use monkey_viewer::core::source::ArtifactSource;
use monkey_viewer::core::svg::SvgPolicy;
use tempfile::TempDir;

use super::support::write_monkey_data;

fn cli() -> Command {
    Command::new("test")
        .args(source_args())
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_parser(clap::value_parser!(u64)),
        )
}

#[test]
fn test_overrides_replace_config_values() {
    let matches = cli()
        .try_get_matches_from([
            "test",
            "--url",
            "https://example.com/monkey_data",
            "--timeout",
            "9",
            "--interval",
            "15",
            "--sanitize-svg",
        ])
        .unwrap();

    let mut config = ViewerConfig {
        data_dir: Some("/old".to_string()),
        ..Default::default()
    };
    apply_overrides(&mut config, &matches);

    assert_eq!(config.base_url, "https://example.com/monkey_data");
    assert!(config.data_dir.is_none());
    assert_eq!(config.request_timeout_secs, 9);
    assert_eq!(config.refresh_interval_secs, 15);
    assert_eq!(config.svg_policy, SvgPolicy::Sanitize);
}

#[test]
fn test_no_flags_leave_config_alone() {
    let matches = Command::new("bare").try_get_matches_from(["bare"]).unwrap();
    let mut config = ViewerConfig::default();
    apply_overrides(&mut config, &matches);
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_build_source_prefers_directory() {
    let config = ViewerConfig {
        data_dir: Some("/srv/monkey_data".to_string()),
        ..Default::default()
    };
    let source = build_source(&config).unwrap();
    assert_eq!(source.describe(), "/srv/monkey_data");
}

#[test]
fn test_build_source_rejects_bad_url() {
    let config = ViewerConfig {
        base_url: "not a url".to_string(),
        ..Default::default()
    };
    assert!(build_source(&config).is_err());
}

#[test]
fn test_build_viewer_from_directory_config() {
    let data = TempDir::new().unwrap();
    write_monkey_data(data.path(), 1);
    let exports = TempDir::new().unwrap();

    let config = ViewerConfig {
        data_dir: Some(data.path().to_string_lossy().to_string()),
        export_dir: Some(exports.path().to_string_lossy().to_string()),
        refresh_interval_secs: 5,
        ..Default::default()
    };

    let mut viewer = build_viewer(&config).unwrap();
    assert_eq!(viewer.refresh().interval().as_secs(), 5);
    assert!(viewer.reload());
    assert!(viewer.download().unwrap().starts_with(exports.path()));
}
