//! TOML-based application configuration.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::sim::types::DEFAULT_MAX_NUM_POINTS;

/// Top-level configuration parsed from TOML.
///
/// All sections are optional and fall back to [`AppConfig::default`]. Load
/// with [`AppConfig::from_toml_file`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Calculator limits.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `"127.0.0.1:8000"`.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Calculator limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Largest accepted `num_points` (must be > 0).
    pub max_num_points: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_num_points: DEFAULT_MAX_NUM_POINTS,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"server.bind"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl AppConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Parsed listener address.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| ConfigError {
            field: "server.bind".to_string(),
            message: format!("\"{}\" is not a socket address: {e}", self.server.bind),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.bind_addr() {
            errors.push(e);
        }
        if self.simulation.max_num_points == 0 {
            errors.push(ConfigError {
                field: "simulation.max_num_points".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}
