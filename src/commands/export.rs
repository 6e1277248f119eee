use anyhow::{bail, Context, Result};
use clap::ArgMatches;

use super::{build_viewer, resolve_config};
use crate::core::source::ArtifactSource;
use crate::ui::prompts;

/// Load once and save the artwork as forkmonkey-<millis>.svg
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let mut viewer = build_viewer(&config)?;

    if !viewer.reload() {
        bail!(
            "Failed to load monkey data from {}. Make sure you have initialized a monkey first!",
            viewer.source().describe()
        );
    }

    let path = viewer
        .try_download()
        .context("Could not export the monkey")?;

    prompts::success(&format!("Saved {}", path.display()));
    Ok(())
}
