// Monkey Viewer Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, ViewerError};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::ViewerConfig;
pub use crate::core::viewer::Viewer;

use std::fs::OpenOptions;
use std::path::Path;

// Initialize logging to stderr
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Initialize logging into a file, used while the TUI owns the terminal
pub fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
