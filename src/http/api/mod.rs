//! Versioned API sub-trees.
//!
//! Resource routers mount under `API_PATH_PREFIX` plus a version segment.

pub mod v1;

/// Path prefix for all API endpoint URLs.
pub const API_PATH_PREFIX: &str = "/api";
