//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of a merged snapshot (serde handles syntactic)
//! - Reject outbound ports no client can connect to
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ConfigSnapshot → Result<(), Vec<ValidationError>>
//! - Runs before a snapshot is cached
//! - The cache URL is not checked here; the cache connector is its only judge

use thiserror::Error;

use crate::config::schema::ConfigSnapshot;

/// A single semantic problem with a resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between 1 and 65535")]
    ZeroPort { field: &'static str },
}

/// Validate a merged snapshot.
pub fn validate_snapshot(config: &ConfigSnapshot) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, port) in [
        ("database port", config.database_port),
        ("mail port", config.mail_port),
    ] {
        if port == 0 {
            errors.push(ValidationError::ZeroPort { field });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
