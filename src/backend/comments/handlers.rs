//! Comment HTTP Handlers
//!
//! Any authenticated user may read and add comments on an existing trip.
//! Only a comment's author may edit or delete it; for anyone else the
//! comment is reported as not found.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::db;
use crate::backend::db::Database;
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::middleware::AuthUser;
use crate::backend::trips::db::trip_exists;
use crate::shared::error::parse_id;
use crate::shared::{Comment, CommentRequest};

fn comment_not_found() -> BackendError {
    BackendError::not_found("Comment not found")
}

/// Add a comment to a trip
///
/// # Errors
///
/// * `400 Bad Request` - Bad trip ID or empty content
/// * `404 Not Found` - The trip does not exist
pub async fn create_comment(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    Path(trip_id): Path<String>,
    JsonBody(request): JsonBody<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    let trip_id = parse_id("trip", &trip_id)?;
    request.validate()?;

    if !trip_exists(&db, trip_id).await? {
        tracing::warn!("Comment on missing trip {}", trip_id);
        return Err(BackendError::not_found("Trip not found"));
    }

    let comment = Comment::new(user.user_id, trip_id, request.content);
    db::insert_comment(&db, &comment).await?;

    tracing::info!("Comment {} added to trip {} by {}", comment.id, trip_id, user.user_id);
    Ok((StatusCode::CREATED, Json(comment)))
}

/// List comments on a trip
pub async fn list_comments(
    State(db): State<Database>,
    AuthUser(_user): AuthUser,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let trip_id = parse_id("trip", &trip_id)?;
    let comments = db::list_comments(&db, trip_id).await?;
    Ok(Json(comments))
}

/// Get a single comment on a trip
pub async fn get_comment(
    State(db): State<Database>,
    AuthUser(_user): AuthUser,
    Path((trip_id, comment_id)): Path<(String, String)>,
) -> Result<Json<Comment>, BackendError> {
    let trip_id = parse_id("trip", &trip_id)?;
    let comment_id = parse_id("comment", &comment_id)?;

    let comment = db::find_comment(&db, trip_id, comment_id)
        .await?
        .ok_or_else(comment_not_found)?;

    Ok(Json(comment))
}

/// Replace the content of the caller's comment
///
/// # Errors
///
/// * `400 Bad Request` - Bad ID or empty content
/// * `404 Not Found` - No such comment, or the caller is not its author
pub async fn update_comment(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    Path((trip_id, comment_id)): Path<(String, String)>,
    JsonBody(request): JsonBody<CommentRequest>,
) -> Result<Json<Comment>, BackendError> {
    let trip_id = parse_id("trip", &trip_id)?;
    let comment_id = parse_id("comment", &comment_id)?;
    request.validate()?;

    let comment = db::update_comment(&db, user.user_id, trip_id, comment_id, &request.content)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Update of missing or foreign comment {} by {}", comment_id, user.user_id);
            comment_not_found()
        })?;

    Ok(Json(comment))
}

/// Delete the caller's comment
pub async fn delete_comment(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
    Path((trip_id, comment_id)): Path<(String, String)>,
) -> Result<StatusCode, BackendError> {
    let trip_id = parse_id("trip", &trip_id)?;
    let comment_id = parse_id("comment", &comment_id)?;

    if !db::delete_comment(&db, user.user_id, trip_id, comment_id).await? {
        return Err(comment_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
