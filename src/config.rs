//! Client configuration loaded from `~/.config/audiothek/config.toml`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.ardaudiothek.de/graphql";
/// Host of the public web interface whose URLs are resolved.
pub const DEFAULT_SITE_HOST: &str = "ardaudiothek.de";

/// Runtime settings. Every key is optional in the file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint queried for every resolution.
    pub api_url: String,
    /// Site host accepted by URL classification (`www.` is implied).
    pub site_host: String,
    pub user_agent: String,
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            site_host: DEFAULT_SITE_HOST.to_string(),
            user_agent: format!("audiothek/{}", crate::VERSION),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("audiothek")
        .join("config.toml")
}
