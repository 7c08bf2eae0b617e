//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports non-zero, header budget non-zero)
//! - Check the bind address parses as a socket address
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::Config;

/// A single semantic validation failure.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the loaded configuration, collecting every failure.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "server.bind",
            message: format!("{:?} is not a valid socket address", config.server.bind),
        });
    }

    if config.server.max_header_bytes == 0 {
        errors.push(ValidationError {
            field: "server.max_header_bytes",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.database.port == 0 {
        errors.push(ValidationError {
            field: "database.port",
            message: "must be non-zero".to_string(),
        });
    }

    if config.database.database.is_empty() {
        errors.push(ValidationError {
            field: "database.database",
            message: "must not be empty".to_string(),
        });
    }

    if config.redis.port == 0 {
        errors.push(ValidationError {
            field: "redis.port",
            message: "must be non-zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
