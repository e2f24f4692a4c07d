//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use depmon_core::validation::validate_per_page;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub http_host: IpAddr,

    /// HTTP server port
    pub http_port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Maximum pooled database connections
    pub db_max_connections: u32,

    /// Page size used when a request omits `perPage`
    pub default_per_page: i64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value of a
    /// variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            http_host: parse_or(&lookup, "HTTP_HOST", "0.0.0.0")?,
            http_port: parse_or(&lookup, "HTTP_PORT", "8080")?,
            database_path: PathBuf::from(
                lookup("DATABASE_PATH").unwrap_or_else(|| "./depmon.db".to_string()),
            ),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", "5")?,
            default_per_page: parse_or(&lookup, "DEFAULT_PER_PAGE", "10")?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        validate_per_page(config.default_per_page)
            .map_err(|_| ConfigError::InvalidValue("DEFAULT_PER_PAGE".to_string()))?;

        Ok(config)
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.database_path, PathBuf::from("./depmon.db"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.default_per_page, 10);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", "9000"),
            ("DATABASE_PATH", "/var/lib/depmon/depmon.db"),
            ("DEFAULT_PER_PAGE", "25"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.database_path, PathBuf::from("/var/lib/depmon/depmon.db"));
        assert_eq!(config.default_per_page, 25);
    }

    #[test]
    fn test_invalid_values() {
        let err = ApiConfig::from_lookup(lookup_from(&[("HTTP_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for HTTP_PORT");

        let err = ApiConfig::from_lookup(lookup_from(&[("DEFAULT_PER_PAGE", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for DEFAULT_PER_PAGE");

        let err =
            ApiConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for DB_MAX_CONNECTIONS");
    }
}
