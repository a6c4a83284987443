//! Layered server configuration
//!
//! Sources, lowest to highest precedence: built-in defaults, an optional TOML
//! file, then `TURNOS_*` environment variables. Nested keys use `__`, e.g.
//! `TURNOS_DATABASE__PATH=/var/lib/turnos.db`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    /// Values were read but are not usable
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// SQLite file at `DatabaseConfig::path`
    Sqlite,
    /// Process-local maps, lost on exit
    Memory,
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend to open at startup
    pub backend: DatabaseBackend,
    /// SQLite file path
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::Sqlite,
            path: PathBuf::from("turnos.db"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address
    pub bind_addr: String,
    /// Per-request deadline in milliseconds
    pub request_timeout_ms: u64,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Storage settings
    pub database: DatabaseConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            request_timeout_ms: 5000,
            log_level: "info".to_string(),
            database: DatabaseConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Environment variable prefix
    pub const ENV_PREFIX: &'static str = "TURNOS";

    /// Load from the default file location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path(), Self::ENV_PREFIX)
    }

    /// `$TURNOS_CONFIG`, else `<config dir>/turnos/config.toml`
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os("TURNOS_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("turnos")
            .join("config.toml")
    }

    /// Load from `path` (if it exists) and variables starting with `env_prefix`
    pub fn load_from(path: &Path, env_prefix: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(Config::try_from(&ApiConfig::default())?)
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: ApiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.database.backend == DatabaseBackend::Sqlite
            && self.database.path.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "database.path is required for the sqlite backend".to_string(),
            ));
        }
        Ok(())
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|e| {
            ConfigError::Validation(format!("invalid bind_addr '{}': {}", self.bind_addr, e))
        })
    }

    /// Per-request deadline
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
