use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/currency-converter/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("currency-converter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Replaces the backend base URL and re-validates.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is http(s)
    /// - Every endpoint path is absolute
    /// - Timeouts and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api = &self.api;
        if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url '{}' must start with http:// or https://",
                    api.base_url
                ),
            });
        }

        let paths = [
            ("api.symbols_path", &api.symbols_path),
            ("api.convert_path", &api.convert_path),
            ("api.history_path", &api.history_path),
        ];
        for (name, path) in paths {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError {
                    message: format!("{} '{}' must start with '/'", name, path),
                });
            }
        }

        if api.timeout_seconds == 0 || api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
