/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate that email, username and password are present
 * 2. Hash password using bcrypt at the configured cost
 * 3. Insert the credential; the store rejects duplicate email or username
 * 4. Return the new user's public fields
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::{hash_password, CredentialStore, NewCredential};
use crate::backend::db::Database;
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::server::state::PasswordCost;

/// Register handler
///
/// # Arguments
///
/// * `State(db)` - Store handle
/// * `State(cost)` - bcrypt cost
/// * `JsonBody(request)` - email, username and password
///
/// # Returns
///
/// `201 Created` with `{id, email, username}`
///
/// # Errors
///
/// * `400 Bad Request` - A field is missing or the email has no `@`
/// * `409 Conflict` - Email or username is already registered
/// * `500 Internal Server Error` - Hashing or store failure
pub async fn register(
    State(db): State<Database>,
    State(PasswordCost(cost)): State<PasswordCost>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    request.validate().map_err(|e| {
        tracing::warn!("Invalid registration request: {}", e);
        e
    })?;

    let password_hash = hash_password(request.password, cost).await?;

    let id = db
        .insert_one(NewCredential {
            email: request.email.clone(),
            username: request.username.clone(),
            password_hash,
        })
        .await
        .map_err(|e| {
            tracing::warn!("Failed to register {}: {}", request.username, e);
            e
        })?;

    tracing::info!("User registered: {} ({})", request.username, id);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: id.to_string(),
            email: request.email,
            username: request.username,
        }),
    ))
}
