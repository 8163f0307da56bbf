//! Backend Module
//!
//! This module contains all server-side code for the trip planner: an Axum
//! HTTP server where users register, log in, and manage trips and the
//! comments attached to them.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state and app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credentials, token codec, login flow, auth handlers
//! - **`middleware`** - Bearer-token guard for protected routes
//! - **`trips`** - Trip storage and handlers
//! - **`comments`** - Comment storage and handlers
//! - **`db`** - Store connection pool and per-operation timeouts
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── trips/          - Trips
//! ├── comments/       - Comments
//! ├── db/             - Store pool and schema
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → router → auth middleware → token codec → handler, with the
//! verified user ID scoping every store query. A rejected token ends the
//! request with 401 before the handler runs.
//!
//! # Thread Safety
//!
//! `AppState` is read-only after startup. The store pool is safe for
//! concurrent use and bcrypt work runs on the blocking thread pool.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; lower-layer errors convert
//! into it with `?` and render as `{"error", "kind", "status"}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Store connection and schema
pub mod db;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Trips owned by users
pub mod trips;

/// Comments on trips
pub mod comments;

pub use error::BackendError;
pub use server::create_app;
