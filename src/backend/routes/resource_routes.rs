/**
 * Trip and Comment Routes
 *
 * Every route here requires authentication.
 *
 * ## Trips
 * - `POST /trips`, `GET /trips`
 * - `GET|PUT|DELETE /trips/{id}`
 *
 * ## Comments
 * - `POST|GET /comments/{trip_id}/comments`
 * - `GET|PUT|DELETE /comments/{trip_id}/comments/{id}`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::comments::{create_comment, delete_comment, get_comment, list_comments, update_comment};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::trips::{create_trip, delete_trip, get_trip, list_trips, update_trip};

/// Configure trip and comment routes behind the auth middleware
pub fn configure_resource_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/trips", post(create_trip).get(list_trips))
        .route("/trips/{id}", get(get_trip).put(update_trip).delete(delete_trip))
        .route(
            "/comments/{trip_id}/comments",
            post(create_comment).get(list_comments),
        )
        .route(
            "/comments/{trip_id}/comments/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(protected)
}
