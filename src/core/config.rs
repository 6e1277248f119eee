use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::svg::SvgPolicy;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/monkey_data/";
pub const DEFAULT_REFRESH_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Keys accepted by `config set` / `config get`
pub const CONFIG_KEYS: &[&str] = &[
    "base_url",
    "data_dir",
    "refresh_interval_secs",
    "request_timeout_secs",
    "export_dir",
    "svg_policy",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Local `monkey_data/` directory; takes precedence over `base_url`
    #[serde(default)]
    pub data_dir: Option<String>,
    #[serde(default = "default_refresh_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Where exports land. Current directory when unset.
    #[serde(default)]
    pub export_dir: Option<String>,
    #[serde(default)]
    pub svg_policy: SvgPolicy,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            data_dir: None,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            export_dir: None,
            svg_policy: SvgPolicy::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Missing, empty or unreadable JSON all yield the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {:?}: {}", path, e);
            Self::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("monkey-viewer").join("config.json"))
    }

    /// Default log file used while the dashboard owns the terminal
    pub fn default_log_path() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir().context("Could not determine cache directory")?;

        Ok(cache_dir.join("monkey-viewer").join("viewer.log"))
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn get_value(&self, key: &str) -> Result<String> {
        let value = match key {
            "base_url" => self.base_url.clone(),
            "data_dir" => self.data_dir.clone().unwrap_or_default(),
            "refresh_interval_secs" => self.refresh_interval_secs.to_string(),
            "request_timeout_secs" => self.request_timeout_secs.to_string(),
            "export_dir" => self.export_dir.clone().unwrap_or_default(),
            "svg_policy" => self.svg_policy.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Set one key from its string form. An empty value clears optional keys.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "base_url" => {
                if value.is_empty() {
                    return Err(anyhow!("base_url cannot be empty"));
                }
                self.base_url = value.to_string();
            }
            "data_dir" => self.data_dir = optional(value),
            "refresh_interval_secs" => self.refresh_interval_secs = parse_secs(key, value)?,
            "request_timeout_secs" => self.request_timeout_secs = parse_secs(key, value)?,
            "export_dir" => self.export_dir = optional(value),
            "svg_policy" => self.svg_policy = value.parse().map_err(|e: String| anyhow!(e))?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    let secs: u64 = value
        .parse()
        .with_context(|| format!("{} must be a whole number of seconds", key))?;
    if secs == 0 {
        return Err(anyhow!("{} must be at least 1", key));
    }
    Ok(secs)
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow!(
        "Unknown config key '{}'. Valid keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    )
}
