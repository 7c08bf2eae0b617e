//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use stock_backend::config::ServerConfig;
use stock_backend::stores::{PgPool, SessionStore, StoreError};
use stock_backend::{build_router, AppState, ServiceLifecycle};

/// In-memory session store standing in for Redis.
pub struct MemorySessions(HashMap<String, String>);

impl MemorySessions {
    pub fn with_tokens(tokens: &[(&str, &str)]) -> Self {
        Self(
            tokens
                .iter()
                .map(|(token, login)| (token.to_string(), login.to_string()))
                .collect(),
        )
    }
}

#[async_trait]
impl SessionStore for MemorySessions {
    async fn resolve(&self, token: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.get(token).cloned())
    }
}

/// A pool that never connects unless queried. Lifecycle tests exercise
/// run/stop, not the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new().connect_lazy_with(PgConnectOptions::new())
}

/// Server config bound to an ephemeral port.
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        bind: "127.0.0.1:0".to_string(),
        ..ServerConfig::default()
    }
}

/// Full lifecycle wired with an in-memory session store.
#[allow(dead_code)]
pub fn test_lifecycle(tokens: &[(&str, &str)]) -> ServiceLifecycle {
    let config = test_server_config();
    let db = lazy_pool();
    let state = AppState {
        db: db.clone(),
        sessions: Arc::new(MemorySessions::with_tokens(tokens)),
    };
    let router = build_router(state, &config);

    ServiceLifecycle::new(config, router, db)
}
