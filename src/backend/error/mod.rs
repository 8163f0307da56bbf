//! Backend Error Module
//!
//! This module defines the error returned by HTTP handlers and its
//! conversion into a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and conversions from lower layers
//! ├── conversion.rs - IntoResponse implementation
//! └── rejection.rs  - JsonBody extractor for request bodies
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so a handler failure becomes a
//! status code plus `{"error", "kind", "status"}` body without any extra
//! code in the handler.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Request body extraction
pub mod rejection;

pub use rejection::JsonBody;
pub use types::{BackendError, INVALID_CREDENTIALS};
