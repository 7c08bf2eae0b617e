//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! STOCK_CONFPATH (or ./etc/config.toml)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → Config (validated, immutable)
//!     → shared with all subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and immutable thereafter
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::Config;
pub use schema::DatabaseConfig;
pub use schema::RedisConfig;
pub use schema::ServerConfig;
