// Command handlers module
pub mod config;
pub mod export;
pub mod show;
pub mod version;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};

use crate::core::config::ViewerConfig;
use crate::core::export::Exporter;
use crate::core::refresh::AutoRefresh;
use crate::core::source::{ArtifactSource, DirSource, HttpSource};
use crate::core::svg::SvgPolicy;
use crate::core::viewer::Viewer;

/// Arguments shared by every command that loads the monkey
pub fn source_args() -> Vec<Arg> {
    vec![
        Arg::new("url")
            .short('u')
            .long("url")
            .value_name("URL")
            .help("Base URL serving dna.json, stats.json, history.json and monkey.svg")
            .conflicts_with("dir"),
        Arg::new("dir")
            .long("dir")
            .value_name("PATH")
            .help("Read the artifacts from a local monkey_data directory instead"),
        Arg::new("timeout")
            .long("timeout")
            .value_name("SECS")
            .help("Request timeout in seconds")
            .value_parser(clap::value_parser!(u64).range(1..)),
        Arg::new("sanitize-svg")
            .long("sanitize-svg")
            .help("Strip scripts and event handlers from the artwork")
            .action(ArgAction::SetTrue),
    ]
}

/// Persisted config with this run's command line overrides applied
pub fn resolve_config(matches: &ArgMatches) -> Result<ViewerConfig> {
    let mut config = ViewerConfig::load()?;
    apply_overrides(&mut config, matches);
    Ok(config)
}

pub fn apply_overrides(config: &mut ViewerConfig, matches: &ArgMatches) {
    if let Some(url) = matches.try_get_one::<String>("url").ok().flatten() {
        config.base_url = url.clone();
        config.data_dir = None;
    }
    if let Some(dir) = matches.try_get_one::<String>("dir").ok().flatten() {
        config.data_dir = Some(dir.clone());
    }
    if let Some(timeout) = matches.try_get_one::<u64>("timeout").ok().flatten() {
        config.request_timeout_secs = *timeout;
    }
    if let Some(interval) = matches.try_get_one::<u64>("interval").ok().flatten() {
        config.refresh_interval_secs = *interval;
    }
    if let Some(export_dir) = matches.try_get_one::<String>("export-dir").ok().flatten() {
        config.export_dir = Some(export_dir.clone());
    }
    if matches
        .try_get_one::<bool>("sanitize-svg")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
    {
        config.svg_policy = SvgPolicy::Sanitize;
    }
}

/// Pick the artifact source the config points at
pub fn build_source(config: &ViewerConfig) -> Result<Box<dyn ArtifactSource>> {
    match &config.data_dir {
        Some(dir) => Ok(Box::new(DirSource::new(PathBuf::from(dir)))),
        None => {
            let source = HttpSource::new(&config.base_url, config.request_timeout())
                .with_context(|| format!("Invalid base URL '{}'", config.base_url))?;
            Ok(Box::new(source))
        }
    }
}

pub fn build_viewer(config: &ViewerConfig) -> Result<Viewer<Box<dyn ArtifactSource>>> {
    let source = build_source(config)?;
    Ok(Viewer::new(
        source,
        AutoRefresh::new(config.refresh_interval()),
        Exporter::new(config.export_dir()),
        config.svg_policy,
    ))
}
