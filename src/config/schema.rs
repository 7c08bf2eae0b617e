//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the backend.
//! All types derive Serde traits for deserialization from config files.
//! Durations are written as whole seconds in the file and converted here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Postgres connection parameters.
    pub database: DatabaseConfig,

    /// HTTP server tuning parameters.
    pub server: ServerConfig,

    /// Redis address for the session store.
    pub redis: RedisConfig,
}

/// Postgres connection parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Role to connect as.
    pub user: String,

    /// Password for the role.
    pub password: String,

    /// Database name.
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            user: "stock".to_string(),
            password: String::new(),
            database: "stock".to_string(),
        }
    }
}

/// HTTP server tuning parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind: String,

    /// Deadline for reading the request body, in seconds.
    pub read_timeout_secs: u64,

    /// Deadline for reading request headers, in seconds.
    pub read_header_timeout_secs: u64,

    /// Deadline for producing the response, in seconds.
    pub write_timeout_secs: u64,

    /// Keep-alive idle timeout, in seconds. Zero disables keep-alive.
    pub idle_timeout_secs: u64,

    /// Maximum bytes buffered while reading request headers.
    pub max_header_bytes: usize,

    /// Drain deadline for graceful shutdown, in seconds.
    /// When unset, shutdown waits for in-flight requests indefinitely.
    pub shutdown_grace_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            read_timeout_secs: 30,
            read_header_timeout_secs: 10,
            write_timeout_secs: 30,
            idle_timeout_secs: 60,
            max_header_bytes: 1024 * 1024,
            shutdown_grace_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn read_header_timeout(&self) -> Duration {
        Duration::from_secs(self.read_header_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Option<Duration> {
        self.shutdown_grace_secs.map(Duration::from_secs)
    }
}

/// Redis address for the session store.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Redis host.
    pub addr: String,

    /// Redis port.
    pub port: u16,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1".to_string(),
            port: 6379,
        }
    }
}

impl RedisConfig {
    /// Connection URL for the redis client.
    pub fn url(&self) -> String {
        format!("redis://{}:{}", self.addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.redis.port, 6379);
        assert!(config.server.shutdown_grace().is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let doc = r#"
            [database]
            host = "db.internal"
            port = 5433
            user = "svc"
            password = "secret"
            database = "stock"

            [server]
            bind = "127.0.0.1:9000"
            read_timeout_secs = 5
            read_header_timeout_secs = 2
            write_timeout_secs = 7
            idle_timeout_secs = 15
            max_header_bytes = 4096
            shutdown_grace_secs = 30

            [redis]
            addr = "cache.internal"
            port = 6380
        "#;

        let config: Config = toml::from_str(doc).unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.server.read_timeout(), Duration::from_secs(5));
        assert_eq!(config.server.write_timeout(), Duration::from_secs(7));
        assert_eq!(config.server.shutdown_grace(), Some(Duration::from_secs(30)));
        assert_eq!(config.redis.url(), "redis://cache.internal:6380");
    }
}
