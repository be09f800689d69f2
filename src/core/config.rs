//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::explorer::parse_base_url;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default upstream explorer API (DuckChain Blockscout, API v2).
pub const DEFAULT_EXPLORER_URL: &str = "https://scan.duckchain.io/api/v2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream explorer API configuration.
    pub explorer: ExplorerConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Upstream explorer API configuration.
///
/// Both values are read once, when the shared client is first built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Base URL of the REST API, including the `/api/v2` prefix.
    pub base_url: String,

    /// Request timeout in seconds, applied to the whole connection pool.
    pub timeout_secs: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXPLORER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "duckchain-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            explorer: ExplorerConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_EXPLORER_TIMEOUT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_EXPLORER_URL") {
            info!("Explorer API base URL set to {}", base_url);
            config.explorer.base_url = base_url;
        }

        if let Ok(raw) = std::env::var("MCP_EXPLORER_TIMEOUT") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.explorer.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_EXPLORER_TIMEOUT={:?}, using {}s",
                    raw, config.explorer.timeout_secs
                ),
            }
        }

        config
    }

    /// Check values that would otherwise only fail on the first tool call.
    pub fn validate(&self) -> Result<()> {
        parse_base_url(&self.explorer.base_url).map_err(|e| Error::config(e.to_string()))?;
        if self.explorer.timeout_secs == 0 {
            return Err(Error::config("explorer timeout must be at least one second"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_explorer_defaults() {
        let config = Config::default();
        assert_eq!(config.explorer.base_url, "https://scan.duckchain.io/api/v2");
        assert_eq!(config.explorer.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explorer_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_EXPLORER_URL", "http://localhost:4000/api/v2");
            std::env::set_var("MCP_EXPLORER_TIMEOUT", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.explorer.base_url, "http://localhost:4000/api/v2");
        assert_eq!(config.explorer.timeout_secs, 5);
        unsafe {
            std::env::remove_var("MCP_EXPLORER_URL");
            std::env::remove_var("MCP_EXPLORER_TIMEOUT");
        }
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        for raw in ["soon", "0", "-3"] {
            unsafe {
                std::env::set_var("MCP_EXPLORER_TIMEOUT", raw);
            }
            let config = Config::from_env();
            assert_eq!(config.explorer.timeout_secs, DEFAULT_TIMEOUT_SECS);
        }
        unsafe {
            std::env::remove_var("MCP_EXPLORER_TIMEOUT");
        }
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::default();
        config.explorer.base_url = "scan.duckchain.io".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.explorer.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
