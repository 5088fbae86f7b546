use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE, DEFAULT_POLL_INTERVAL_SECS};

/// Resolved settings a controller is constructed with
#[derive(Debug, Clone)]
pub struct ForumConfig {
    pub api_base: Url,
    pub poll_interval: Duration,
}

impl ForumConfig {
    pub fn new(api_base: &str) -> Result<Self> {
        Ok(Self {
            api_base: normalize_api_base(api_base)?,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        })
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Layer CLI/env overrides over the file config over built-in defaults.
    pub fn resolve(file: &FileConfig, overrides: &ConfigOverrides) -> Result<Self> {
        let api_base = overrides
            .api_base
            .as_deref()
            .or(file.api_base.as_deref())
            .unwrap_or(DEFAULT_API_BASE);

        let poll_secs = overrides
            .poll_interval_secs
            .or(file.poll_interval_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
        if poll_secs == 0 {
            bail!("Poll interval must be at least 1 second");
        }

        Ok(Self::new(api_base)?.with_poll_interval(Duration::from_secs(poll_secs)))
    }
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

/// Validates and normalizes an API base URL.
///
/// Rules:
/// - Must not be empty
/// - Must have http:// or https:// scheme
/// - Trailing slashes are removed
pub fn normalize_api_base(api_base: &str) -> Result<Url> {
    let trimmed = api_base.trim();

    if trimmed.is_empty() {
        bail!("API base URL cannot be empty");
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        bail!("API base URL must start with http:// or https://: {}", trimmed);
    }

    let normalized = trimmed.trim_end_matches('/');
    Url::parse(normalized).with_context(|| format!("Invalid API base URL: {}", normalized))
}

/// Values taken from the command line or the process environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub poll_interval_secs: Option<u64>,
}

/// Forum configuration that can be loaded from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,
}

impl FileConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: FileConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the explicit path if given, else the default location when it exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("forum").join("config.json"))
}
