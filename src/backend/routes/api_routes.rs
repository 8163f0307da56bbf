/**
 * Authentication Routes
 *
 * # Routes
 *
 * - `POST /register` - User registration (public)
 * - `POST /login` - User login, returns a token (public)
 * - `GET /me` - Current user info (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// `/register` and `/login` are public. `/me` sits behind the auth
/// middleware, which rejects the request with 401 before the handler runs
/// when the token is missing or invalid.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_me))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}
