/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Authentication routes (register, login, me)
 * 2. Trip and comment routes
 * 3. Fallback handler (JSON 404)
 *
 * HTTP request tracing wraps the whole router.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::resource_routes::configure_resource_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared store handle and token codec
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_api_routes(router, &app_state);
    let router = configure_resource_routes(router, &app_state);

    router
        .fallback(|| async { BackendError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
