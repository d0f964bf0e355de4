//! Configuration loading from disk.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::{ControlConfig, RelayConfig};
use crate::config::validation::{validate_control, validate_relay, ValidationError};

/// Startup configuration errors. Every variant is fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),

    #[error("Failed to parse pod index from pod name '{name}': {reason}")]
    InvalidIdentity { name: String, reason: String },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate relay configuration. `None` yields the defaults.
pub fn load_relay_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let config: RelayConfig = match path {
        Some(path) => read_toml(path)?,
        None => RelayConfig::default(),
    };

    validate_relay(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate control server configuration. `None` yields the defaults.
pub fn load_control_config(path: Option<&Path>) -> Result<ControlConfig, ConfigError> {
    let config: ControlConfig = match path {
        Some(path) => read_toml(path)?,
        None => ControlConfig::default(),
    };

    validate_control(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}
