//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation
//! ├── api_routes.rs      - Authentication endpoints
//! └── resource_routes.rs - Trip and comment endpoints
//! ```
//!
//! # Authentication
//!
//! Protected routes are grouped into sub-routers with the auth middleware
//! applied through `route_layer`, so unknown paths fall through to the
//! JSON 404 fallback instead of returning 401.

/// Main router creation
pub mod router;

/// Authentication routes
pub mod api_routes;

/// Trip and comment routes
pub mod resource_routes;

pub use router::create_router;
