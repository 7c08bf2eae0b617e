//! Startup error taxonomy.
//!
//! Lower layers return their own error types; this enum is the top of the
//! funnel. Only `main` maps it to a process exit.

use crate::config::loader::ConfigError;
use crate::lifecycle::server::LifecycleError;

/// Errors that abort startup before the process reaches its signal wait.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cache: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("server: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("signal handler: {0}")]
    Signals(#[from] std::io::Error),
}
