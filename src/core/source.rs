//! Where the monkey artifacts come from.
//!
//! The generator publishes four files side by side. They are read either from
//! a static HTTP server or straight from the `monkey_data/` directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::{Result, ViewerError};

pub const DNA_FILE: &str = "dna.json";
pub const STATS_FILE: &str = "stats.json";
pub const HISTORY_FILE: &str = "history.json";
pub const SVG_FILE: &str = "monkey.svg";

/// Read-only access to the artifact set
pub trait ArtifactSource {
    /// Human readable location, shown in the dashboard header
    fn describe(&self) -> String;

    /// Fetch one artifact as text
    fn fetch_text(&self, name: &str) -> Result<String>;
}

impl<T: ArtifactSource + ?Sized> ArtifactSource for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch_text(&self, name: &str) -> Result<String> {
        (**self).fetch_text(name)
    }
}

impl<T: ArtifactSource + ?Sized> ArtifactSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch_text(&self, name: &str) -> Result<String> {
        (**self).fetch_text(name)
    }
}

/// Artifacts served over HTTP below a base URL
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = normalize_base(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("monkey-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base, client })
    }

    pub fn url_for(&self, name: &str) -> Result<Url> {
        Ok(self.base.join(name)?)
    }
}

impl ArtifactSource for HttpSource {
    fn describe(&self) -> String {
        self.base.to_string()
    }

    fn fetch_text(&self, name: &str) -> Result<String> {
        let url = self.url_for(name)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::not_found(name, status.as_u16()));
        }

        Ok(response.text()?)
    }
}

/// Base URLs are joined relative to, so they must end in a slash
fn normalize_base(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(ViewerError::config("base URL is empty"));
    }

    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ViewerError::config(format!(
            "unsupported URL scheme '{}', expected http or https",
            other
        ))),
    }
}

/// Artifacts read from a local directory
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ArtifactSource for DirSource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn fetch_text(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        debug!("read {}", path.display());

        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ViewerError::not_found(name, 404))
            }
            Err(e) => Err(e.into()),
        }
    }
}
