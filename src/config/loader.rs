use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::ApiReducer;
use crate::config::types::Config;
use crate::policy::ScopePolicy;
use crate::scope::SEPARATOR;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses and validates it.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::ParseError { source: e })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - A type-suffix separator is neither the path separator nor whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let ScopePolicy::TypeSuffix { separator } = self.scoping {
            if separator == SEPARATOR || separator.is_whitespace() {
                return Err(ConfigError::ValidationError {
                    message: format!("Invalid type suffix separator '{}'", separator),
                });
            }
        }
        Ok(())
    }

    /// The lifecycle reducer described by the `[api]` section.
    pub fn api_reducer(&self) -> ApiReducer {
        ApiReducer::from_config(&self.api)
    }
}
