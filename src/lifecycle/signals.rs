//! OS signal handling.
//!
//! # Responsibilities
//! - Register SIGINT and SIGTERM handlers
//! - Block the main path until a signal or a server fault arrives
//! - Return exactly once; teardown re-entry is impossible by construction
//!   and a second signal during teardown is coalesced by the idempotent stop
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - The server-fault channel is selected alongside the signals so a dead
//!   listener does not leave the process blocked here

use tokio::signal::unix::{signal, SignalKind};

use crate::lifecycle::shutdown::Shutdown;

/// Why the main path stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT delivered.
    Interrupt,
    /// SIGTERM delivered.
    Terminate,
    /// The serve task terminated on its own and triggered shutdown.
    ServerFault,
}

/// Block until a termination signal or a server fault arrives.
pub async fn wait_for_shutdown(shutdown: &Shutdown) -> std::io::Result<ShutdownReason> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    let reason = tokio::select! {
        _ = interrupt.recv() => {
            tracing::info!(signal = "SIGINT", "got signal");
            ShutdownReason::Interrupt
        }
        _ = terminate.recv() => {
            tracing::info!(signal = "SIGTERM", "got signal");
            ShutdownReason::Terminate
        }
        _ = shutdown.triggered() => {
            tracing::warn!("server fault, shutting down");
            ShutdownReason::ServerFault
        }
    };

    Ok(reason)
}
