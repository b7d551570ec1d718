//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::cli::Cli;
use super::limits::LimitsConfig;
use super::listen::ListenConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid server name {0:?}: must be non-empty and contain no whitespace")]
    InvalidServerName(String),
}

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server information.
    #[serde(default)]
    pub server: ServerConfig,
    /// Network listen configuration.
    #[serde(default)]
    pub listen: ListenConfig,
    /// Per-connection limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the effective configuration: the optional file, then the
    /// command line on top.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if cli.server_name.is_empty() || cli.server_name.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidServerName(cli.server_name.clone()));
        }

        config.server.name = cli.server_name.clone();
        config.listen.port = cli.port;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name used as the prefix of numeric replies (set from the command line).
    #[serde(skip)]
    pub name: String,
    /// Text returned by INFO.
    #[serde(default = "default_info")]
    pub info: String,
    /// Prometheus metrics HTTP port (0 disables the endpoint).
    #[serde(default)]
    pub metrics_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            info: default_info(),
            metrics_port: 0,
        }
    }
}

fn default_info() -> String {
    "minircd, a small line-oriented chat server".to_string()
}
