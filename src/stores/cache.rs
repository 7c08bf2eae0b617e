//! Redis-backed session store.
//!
//! The cache service owns the token → login mapping; this module only
//! performs point lookups, never writes.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::config::RedisConfig;

/// Error type for session store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),
}

/// Point lookup of an access token.
///
/// Returns `Ok(None)` when the token does not resolve to a login. The empty
/// token is an ordinary key that simply fails to resolve.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError>;
}

/// Session store backed by a Redis connection manager.
#[derive(Clone)]
pub struct RedisSessions {
    conn: ConnectionManager,
}

impl RedisSessions {
    /// Connect to Redis and verify liveness with a PING.
    pub async fn connect(config: &RedisConfig) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(config.url())?;
        let mut conn = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<String>(&mut conn).await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl SessionStore for RedisSessions {
    async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError> {
        // ConnectionManager is a cheap handle; clone per lookup.
        let mut conn = self.conn.clone();
        let login: Option<String> = conn.get(token).await?;
        Ok(login)
    }
}
