//! Stock API backend.
//!
//! A thin HTTP API scaffold built with Tokio and Axum: it loads configuration,
//! opens and liveness-checks the Postgres and Redis connections, assembles the
//! versioned router with its cross-cutting middleware, and coordinates a
//! graceful shutdown on SIGINT/SIGTERM.
//!
//! # Data Flow
//! ```text
//! config (loader → validation)
//!     → stores (Postgres pool + Redis session store, probed at startup)
//!     → http (router, error responses, access gate)
//!     → lifecycle (serve task, readiness, shutdown coordination)
//!     → signals (SIGINT/SIGTERM → stop)
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod stores;

pub use config::Config;
pub use http::server::{build_router, AppState};
pub use lifecycle::server::ServiceLifecycle;
pub use lifecycle::shutdown::Shutdown;
