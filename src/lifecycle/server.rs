//! Service lifecycle coordinator.
//!
//! Owns the HTTP listener and its dependency handles from bind to full stop.
//!
//! # State machine
//! ```text
//! Created → Running   run(): serve task spawned, readiness confirmed
//! Running → Stopping  stop(): stop accepting, drain in-flight
//! Stopping → Stopped  serve task joined, pool closed
//! ```
//!
//! # Design Decisions
//! - run() logs the bound address only after the listener is confirmed
//!   ready, via the server handle's listening notification
//! - stop() is idempotent and safe before run(): the serve-task handle is
//!   taken under a lock exactly once, later calls return immediately
//! - A serve-task fault triggers the shutdown coordinator itself so the
//!   process never sits half-running behind the signal wait

use std::net::SocketAddr;

use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_server::Handle;
use hyper_util::rt::TokioTimer;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::config::ServerConfig;
use crate::lifecycle::shutdown::Shutdown;
use crate::stores::PgPool;

/// Error type for lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("invalid bind address {addr:?}: {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}")]
    Bind { addr: String },

    #[error("server is already running")]
    AlreadyRunning,
}

/// Coordinator owning the HTTP listener, the serve task and the store
/// handles. One instance exists per process.
pub struct ServiceLifecycle {
    config: ServerConfig,
    router: Mutex<Option<Router>>,
    handle: Handle,
    shutdown: Shutdown,
    serve_task: Mutex<Option<JoinHandle<()>>>,
    db: PgPool,
}

impl ServiceLifecycle {
    pub fn new(config: ServerConfig, router: Router, db: PgPool) -> Self {
        Self {
            config,
            router: Mutex::new(Some(router)),
            handle: Handle::new(),
            shutdown: Shutdown::new(),
            serve_task: Mutex::new(None),
            db,
        }
    }

    /// Shutdown coordinator fired on serve-task faults. The signal watcher
    /// selects on this alongside SIGINT/SIGTERM.
    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Start serving on a background task and wait for listener readiness.
    ///
    /// Returns the bound address once the listener is accepting connections;
    /// the caller is not blocked beyond that confirmation.
    pub async fn run(&self) -> Result<SocketAddr, LifecycleError> {
        let router = self
            .router
            .lock()
            .await
            .take()
            .ok_or(LifecycleError::AlreadyRunning)?;

        let addr: SocketAddr =
            self.config
                .bind
                .parse()
                .map_err(|source| LifecycleError::Addr {
                    addr: self.config.bind.clone(),
                    source,
                })?;

        // Trailing-slash normalization has to wrap the routing table itself.
        let app = NormalizePathLayer::trim_trailing_slash().layer(router);

        let mut server = axum_server::bind(addr).handle(self.handle.clone());

        // hyper requires a timer when header_read_timeout is set; without one
        // every connection is reset.
        server
            .http_builder()
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(self.config.read_header_timeout())
            .keep_alive(self.config.idle_timeout_secs > 0)
            .max_buf_size(self.config.max_header_bytes);

        let server = server.serve(ServiceExt::<Request>::into_make_service(app));

        let shutdown = self.shutdown.clone();
        let task = tokio::spawn(async move {
            // A graceful stop resolves to Ok; anything else is a transport
            // fault and must tear the process down.
            if let Err(err) = server.await {
                tracing::error!(error = %err, "server terminated unexpectedly");
                shutdown.trigger();
            }
        });
        *self.serve_task.lock().await = Some(task);

        match self.handle.listening().await {
            Some(bound) => {
                tracing::info!(address = %bound, "server listening");
                Ok(bound)
            }
            None => {
                // Bind failed; the serve task has already logged the error.
                if let Some(task) = self.serve_task.lock().await.take() {
                    let _ = task.await;
                }
                Err(LifecycleError::Bind {
                    addr: self.config.bind.clone(),
                })
            }
        }
    }

    /// Stop accepting, drain in-flight requests and join the serve task.
    ///
    /// Safe to call repeatedly and before `run`: only the call that takes
    /// the serve-task handle performs teardown, the rest return immediately.
    pub async fn stop(&self) {
        let task = self.serve_task.lock().await.take();

        let Some(task) = task else {
            tracing::debug!("stop requested with no running server");
            return;
        };

        match self.config.shutdown_grace() {
            Some(grace) => {
                tracing::info!(grace_secs = grace.as_secs(), "draining connections");
                self.handle.graceful_shutdown(Some(grace));
            }
            None => {
                tracing::info!("draining connections without deadline");
                self.handle.graceful_shutdown(None);
            }
        }

        if let Err(err) = task.await {
            tracing::error!(error = %err, "serve task join failed");
        }

        self.db.close().await;
        tracing::info!("server stopped");
    }
}
