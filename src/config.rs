//! Configuration types for edge-engine

use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding `engine.threshold`
pub const THRESHOLD_ENV: &str = "EDGE_THRESHOLD";
/// Environment variable overriding `server.listen_addr`
pub const LISTEN_ADDR_ENV: &str = "EDGE_LISTEN_ADDR";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML for this schema
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the API listens on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8082))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Signal engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Minimum edge percentage for a quote to be flagged (inclusive)
    #[serde(default = "default_threshold")]
    pub threshold: Decimal,

    /// Reject matches with zero or negative prices instead of scoring them
    #[serde(default)]
    pub reject_non_positive_prices: bool,
}

fn default_threshold() -> Decimal {
    Decimal::new(20, 1) // 2.0%
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            reject_non_positive_prices: false,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Prometheus exporter port, disabled when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_port: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Empty or unparseable values leave the current setting in place.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(THRESHOLD_ENV).filter(|v| !v.is_empty()) {
            match parse_decimal(&raw) {
                Some(threshold) => self.engine.threshold = threshold,
                None => tracing::warn!(
                    var = THRESHOLD_ENV,
                    value = %raw,
                    "Ignoring unparseable threshold override"
                ),
            }
        }

        if let Some(raw) = lookup(LISTEN_ADDR_ENV).filter(|v| !v.is_empty()) {
            match raw.parse::<SocketAddr>() {
                Ok(addr) => self.server.listen_addr = addr,
                Err(e) => tracing::warn!(
                    var = LISTEN_ADDR_ENV,
                    value = %raw,
                    error = %e,
                    "Ignoring unparseable listen address override"
                ),
            }
        }
    }
}

/// Parse a decimal in plain or scientific notation
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
