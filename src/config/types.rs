//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::default_server_name;
use super::limits::LimitsConfig;
use super::parser::ParserConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Daemon configuration.
///
/// Every table and field is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server identity.
    #[serde(default)]
    pub server: ServerConfig,
    /// Input limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Reply policy for rejected and unknown lines.
    #[serde(default)]
    pub parser: ParserConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name (e.g., "irc.example.net"), used as the prefix of numeric replies.
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
        }
    }
}
