//! Trip Planner - Main Library
//!
//! A trip-planning HTTP backend built on Axum. Users register and log in
//! with a bearer token, then create, read, update and delete their trips
//! and comment on trips.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by handlers and tests
//!   - Trip and comment structures and their request bodies
//!   - Input validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, auth middleware and handlers
//!   - Token minting and verification
//!   - SQLite store through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use trip_planner::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for bad client input
//! - `backend::error::BackendError` for everything a handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
