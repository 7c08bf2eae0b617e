//! Stock API backend entry point.
//!
//! Startup is strictly ordered: configuration, then store probes, then the
//! router, then the listener. Any failure before the signal wait is fatal
//! and exits non-zero; a signal-driven shutdown exits zero.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stock_backend::config::loader;
use stock_backend::error::StartupError;
use stock_backend::http::server::build_router;
use stock_backend::lifecycle::signals::{wait_for_shutdown, ShutdownReason};
use stock_backend::stores::{postgres, RedisSessions};
use stock_backend::{AppState, ServiceLifecycle};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(ShutdownReason::ServerFault) => {
            tracing::error!("server terminated abnormally");
            std::process::exit(1);
        }
        Ok(_) => {}
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<ShutdownReason, StartupError> {
    let path = loader::config_path();
    let config = loader::load_config(&path)?;
    tracing::info!(
        path = %path.display(),
        bind = %config.server.bind,
        "configuration loaded"
    );

    let db = postgres::connect(&config.database).await?;
    tracing::info!(
        host = %config.database.host,
        database = %config.database.database,
        "database connection verified"
    );

    let sessions = RedisSessions::connect(&config.redis).await?;
    tracing::info!(addr = %config.redis.addr, "cache connection verified");

    let state = AppState {
        db: db.clone(),
        sessions: Arc::new(sessions),
    };
    let router = build_router(state, &config.server);
    let lifecycle = ServiceLifecycle::new(config.server.clone(), router, db);

    lifecycle.run().await?;
    tracing::info!("startup complete");

    let reason = wait_for_shutdown(lifecycle.shutdown()).await?;
    lifecycle.stop().await;

    Ok(reason)
}
