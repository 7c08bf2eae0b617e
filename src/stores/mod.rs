//! External store subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (dependency probe):
//!     config → postgres.rs (open pool, SELECT 1) → PgPool
//!     config → cache.rs (connect, PING) → RedisSessions
//!
//! Per request:
//!     access gate → SessionStore::resolve(token) → login
//! ```
//!
//! # Design Decisions
//! - Probes are fail-fast: no retry, errors propagate to main
//! - Handles are internally synchronized; no external locking
//! - Token lookups go through the SessionStore trait so tests can
//!   substitute an in-memory store

pub mod cache;
pub mod postgres;

pub use cache::{RedisSessions, SessionStore, StoreError};

pub use sqlx::PgPool;
