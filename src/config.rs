//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override
//! earlier):
//!
//! 1. Default values
//! 2. TOML configuration file, if `PET_AUCTION_CONFIG` points at one
//! 3. Environment variables
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PET_AUCTION_CONFIG` | Path to a TOML config file | unset |
//! | `PET_AUCTION_REST_HOST` | REST server host | `0.0.0.0` |
//! | `PET_AUCTION_REST_PORT` | REST server port | `8080` |
//! | `PET_AUCTION_LOG_LEVEL` | Log level filter | `info` |
//! | `PET_AUCTION_LOG_FORMAT` | Log format (`json`/`pretty`) | `json` |
//! | `PET_AUCTION_STARTING_BALANCE` | Balance granted at registration | `100.00` |

use crate::domain::value_objects::Money;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

// ============================================================================
// Configuration Sections
// ============================================================================

/// REST server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Structured JSON lines.
    Json,
    /// Human-readable output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(ConfigError::invalid(
                "log.format",
                format!("expected json or pretty, got {other}"),
            )),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level filter (tracing env-filter syntax).
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

/// Marketplace configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionConfig {
    /// Balance granted to every account at registration.
    pub starting_balance: Money,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            // Money's invariants make this parse infallible for the literal.
            starting_balance: "100.00".parse().unwrap_or_default(),
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// REST server settings.
    pub rest: RestConfig,
    /// Logging settings.
    pub log: LogConfig,
    /// Marketplace settings.
    pub auction: AuctionConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, the optional config file, and
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or
    /// if an environment override carries an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("PET_AUCTION_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Applies overrides from a key-value source, usually the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override carries an invalid value.
    pub fn apply_overrides<F>(&mut self, get: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = get("PET_AUCTION_REST_HOST") {
            self.rest.host = host;
        }
        if let Some(port) = get("PET_AUCTION_REST_PORT") {
            self.rest.port = port
                .parse()
                .map_err(|_| ConfigError::invalid("rest.port", format!("not a port: {port}")))?;
        }
        if let Some(level) = get("PET_AUCTION_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = get("PET_AUCTION_LOG_FORMAT") {
            self.log.format = format.parse()?;
        }
        if let Some(balance) = get("PET_AUCTION_STARTING_BALANCE") {
            self.auction.starting_balance = balance.parse().map_err(|err| {
                ConfigError::invalid("auction.starting_balance", format!("{err}: {balance}"))
            })?;
        }
        Ok(())
    }

    /// Returns the REST bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if host and port do not form a socket address.
    pub fn rest_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.rest.host, self.rest.port)
            .parse()
            .map_err(|_| {
                ConfigError::invalid(
                    "rest.host",
                    format!("not a bind address: {}:{}", self.rest.host, self.rest.port),
                )
            })
    }
}
