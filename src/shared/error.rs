//! Shared Error Types
//!
//! This module defines error types for the wire-level types in `shared`.
//! They describe bad client input and carry enough context to build a
//! human-readable 400 response.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed validation
//! - `InvalidId` - A path identifier could not be parsed
//!
//! # Usage
//!
//! ```rust
//! use trip_planner::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Trip name cannot be empty");
//! ```
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while validating client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Identifier in a path segment is not a valid UUID
    #[error("Invalid {resource} ID format")]
    InvalidId {
        /// Resource the identifier was meant to address (`trip`, `comment`)
        resource: &'static str,
        /// The raw value supplied by the client
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid identifier error
    pub fn invalid_id(resource: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidId {
            resource,
            value: value.into(),
        }
    }
}

/// Parse a path identifier, naming the resource in the error
pub fn parse_id(resource: &'static str, raw: &str) -> Result<Uuid, SharedError> {
    Uuid::parse_str(raw).map_err(|_| SharedError::invalid_id(resource, raw))
}

/// Reject empty or whitespace-only values for a required field
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} cannot be empty", field)));
    }
    Ok(())
}
