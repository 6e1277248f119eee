use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;
use tempfile::NamedTempFile;

use super::svg::find_svg_element;
use crate::error::{Result, ViewerError};

pub const EXPORT_PREFIX: &str = "forkmonkey-";
pub const EXPORT_EXTENSION: &str = "svg";
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Writes the rendered artwork to disk as a standalone `.svg` file
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File name for an export taken at `millis` since the Unix epoch
    pub fn file_name(millis: i64) -> String {
        format!("{}{}.{}", EXPORT_PREFIX, millis, EXPORT_EXTENSION)
    }

    pub fn export(&self, markup: &str) -> Result<PathBuf> {
        self.export_at(markup, Utc::now().timestamp_millis())
    }

    /// Export using a fixed timestamp.
    ///
    /// The content goes to a temporary file in the target directory first and
    /// is renamed into place once complete. If anything fails the temporary
    /// file is removed when the handle drops.
    pub fn export_at(&self, markup: &str, millis: i64) -> Result<PathBuf> {
        let element = find_svg_element(markup).ok_or(ViewerError::NoSubjectToExport)?;

        std::fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(Self::file_name(millis));

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(element.as_bytes())?;
        temp.flush()?;
        temp.persist(&target).map_err(|e| ViewerError::Io(e.error))?;

        info!("exported {} ({})", target.display(), SVG_MIME_TYPE);
        Ok(target)
    }
}
