/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 * The credential check itself lives in `auth::credentials`; this handler
 * only adapts it to HTTP.
 *
 * # Security
 *
 * - Unknown user and wrong password return the same 401 body
 * - Passwords and tokens are never logged
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::{self, LoginError};
use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::db::Database;
use crate::backend::error::{BackendError, JsonBody};

/// Login handler
///
/// # Arguments
///
/// * `State(db)` - Store handle
/// * `State(tokens)` - Token codec
/// * `JsonBody(request)` - email or username, and password
///
/// # Returns
///
/// `200 OK` with `{"token": "..."}`
///
/// # Errors
///
/// * `400 Bad Request` - Neither email nor username supplied
/// * `401 Unauthorized` - Unknown user or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "securepassword123"}
/// ```
pub async fn login(
    State(db): State<Database>,
    State(tokens): State<Arc<TokenCodec>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let who = if request.email.is_empty() {
        request.username.as_str()
    } else {
        request.email.as_str()
    };

    let token = credentials::login(&db, &tokens, &request.email, &request.username, &request.password)
        .await
        .map_err(|e| {
            match &e {
                LoginError::BadRequest => tracing::warn!("Login without email or username"),
                LoginError::NotFound => tracing::warn!("Login for unknown user: {}", who),
                LoginError::InvalidCredentials => tracing::warn!("Invalid password for user: {}", who),
                _ => {}
            }
            BackendError::from(e)
        })?;

    tracing::info!("User logged in: {}", who);

    Ok(Json(TokenResponse { token }))
}
