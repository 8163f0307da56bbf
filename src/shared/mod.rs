//! Shared Module
//!
//! This module contains the wire types exchanged with clients: trips,
//! comments and the validation errors raised while reading them. They are
//! plain serde types with no knowledge of the HTTP layer or the store.

/// Shared error types
pub mod error;

/// Trip data structures
pub mod trip;

/// Comment data structures
pub mod comment;

/// Re-export commonly used types for convenience
pub use comment::{Comment, CommentRequest};
pub use error::SharedError;
pub use trip::{CreateTripRequest, Trip, TripChanges, UpdateTripRequest};
