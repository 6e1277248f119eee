use anyhow::{bail, Result};
use clap::ArgMatches;

use super::{build_viewer, resolve_config};
use crate::core::source::ArtifactSource;
use crate::ui::report::render_report;

/// Load once and print the dashboard to stdout
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let mut viewer = build_viewer(&config)?;

    let loaded = viewer.reload();
    println!("{}", render_report(viewer.page(), &viewer.source().describe()));

    if !loaded {
        bail!("Failed to load monkey data from {}", viewer.source().describe());
    }
    Ok(())
}
