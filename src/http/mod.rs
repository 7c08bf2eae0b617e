//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! request
//!     → trace / request-id layers
//!     → trailing-slash normalization (wrapped around the router)
//!     → panic recovery
//!     → access gate (on protected routes)
//!     → /api/v1 handlers, or the JSON 404 fallback
//! ```
//!
//! # Design Decisions
//! - Every error response is a JSON object with an `error` field
//! - Internal error details are logged, never echoed to clients
//! - A panic in one request is converted to a 500 and contained there

pub mod api;
pub mod middleware;
pub mod response;
pub mod server;

pub use server::{build_router, AppState};
