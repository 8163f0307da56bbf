//! Trip HTTP Handlers
//!
//! All handlers run behind the auth middleware and scope every store call
//! to the caller's user ID.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use super::db;
use crate::backend::db::Database;
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::middleware::AuthUser;
use crate::shared::error::parse_id;
use crate::shared::{CreateTripRequest, Trip, UpdateTripRequest};

fn trip_not_found() -> BackendError {
    BackendError::not_found("Trip not found")
}

/// Create a trip owned by the caller
///
/// # Errors
///
/// * `400 Bad Request` - `name` is missing or empty
pub async fn create_trip(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateTripRequest>,
) -> Result<(StatusCode, Json<Trip>), BackendError> {
    request.validate()?;

    let trip = Trip::new(user.user_id, request);
    db::insert_trip(&db, &trip).await?;

    tracing::info!("Trip {} created by {}", trip.id, user.user_id);
    Ok((StatusCode::CREATED, Json(trip)))
}

/// List the caller's trips
pub async fn list_trips(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Trip>>, BackendError> {
    let trips = db::list_trips(&db, user.user_id).await?;
    Ok(Json(trips))
}

/// Get one of the caller's trips
///
/// # Errors
///
/// * `400 Bad Request` - `id` is not a UUID
/// * `404 Not Found` - No such trip, or it belongs to another user
pub async fn get_trip(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Trip>, BackendError> {
    let trip_id = parse_id("trip", &id)?;

    let trip = db::find_trip(&db, user.user_id, trip_id)
        .await?
        .ok_or_else(trip_not_found)?;

    Ok(Json(trip))
}

/// Update the non-empty fields of one of the caller's trips
///
/// # Errors
///
/// * `400 Bad Request` - Bad ID, or no non-empty field in the body
/// * `404 Not Found` - No such trip, or it belongs to another user
pub async fn update_trip(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateTripRequest>,
) -> Result<Json<Trip>, BackendError> {
    let trip_id = parse_id("trip", &id)?;
    let changes = request.into_changes()?;

    let trip = db::update_trip(&db, user.user_id, trip_id, &changes)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Update of missing or foreign trip {} by {}", trip_id, user.user_id);
            trip_not_found()
        })?;

    Ok(Json(trip))
}

/// Delete one of the caller's trips and its comments
pub async fn delete_trip(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let trip_id = parse_id("trip", &id)?;

    if !db::delete_trip(&db, user.user_id, trip_id).await? {
        return Err(trip_not_found());
    }

    tracing::info!("Trip {} deleted by {}", trip_id, user.user_id);
    Ok(Json(json!({ "message": "Trip deleted successfully" })))
}
