//! Live dashboard command handler.

use anyhow::{Context, Result};
use clap::ArgMatches;

use super::{build_viewer, resolve_config};
use crate::ui::viewer_tui::run_viewer_app;

/// Execute the watch command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    log::info!(
        "watching {} every {}s",
        config.data_dir.as_deref().unwrap_or(&config.base_url),
        config.refresh_interval_secs
    );

    let viewer = build_viewer(&config)?;
    run_viewer_app(viewer).context("Failed to run monkey viewer")
}
