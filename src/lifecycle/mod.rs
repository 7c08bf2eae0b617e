//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (server.rs):
//!     run() → bind listener → wait for readiness → log address
//!
//! Shutdown (server.rs + shutdown.rs):
//!     stop() → stop accepting → drain in-flight → join serve task → close pool
//!     serve-task fault → Shutdown::trigger → signal watcher unblocks
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → return once → caller invokes stop()
//! ```
//!
//! # Design Decisions
//! - run() does not block the caller beyond readiness confirmation
//! - stop() is idempotent: the serve-task handle is taken exactly once
//! - Shutdown errors are logged, never fatal; stop always joins the task

pub mod server;
pub mod shutdown;
pub mod signals;

pub use server::ServiceLifecycle;
pub use shutdown::Shutdown;
pub use signals::{wait_for_shutdown, ShutdownReason};
