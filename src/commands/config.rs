use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::config::{ViewerConfig, CONFIG_KEYS};
use crate::ui::prompts;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("get", sub_matches)) => handle_get(sub_matches),
        Some(("set", sub_matches)) => handle_set(sub_matches),
        Some(("reset", _)) => handle_reset(),
        Some(("path", _)) => handle_path(),
        _ => {
            println!("Use 'monkey-viewer config --help' for more information.");
            Ok(())
        }
    }
}

fn handle_get(matches: &clap::ArgMatches) -> Result<()> {
    let config = ViewerConfig::load()?;

    if let Some(key) = matches.get_one::<String>("key") {
        println!("{}", config.get_value(key)?);
        return Ok(());
    }

    prompts::bold("Viewer configuration:");
    for key in CONFIG_KEYS {
        let value = config.get_value(key)?;
        let shown = if value.is_empty() {
            "(not set)".dimmed().to_string()
        } else {
            value.cyan().to_string()
        };
        println!("  {:<22} {}", key, shown);
    }
    Ok(())
}

fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let key = matches
        .get_one::<String>("key")
        .context("Key argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let mut config = ViewerConfig::load()?;
    config.set_value(key, value)?;
    config.save()?;

    prompts::success(&format!("{} set to: {}", key, config.get_value(key)?));
    if key == "base_url" && config.data_dir.is_some() {
        prompts::warn("data_dir is set and takes precedence over base_url");
    }
    Ok(())
}

fn handle_reset() -> Result<()> {
    ViewerConfig::default().save()?;
    prompts::success("Configuration reset to defaults");
    Ok(())
}

fn handle_path() -> Result<()> {
    println!("{}", ViewerConfig::get_config_path()?.display());
    Ok(())
}
