/**
 * Authentication Middleware
 *
 * This module guards routes that require a logged-in user. It reads the
 * `Authorization` header, verifies the bearer token and hands the user ID
 * to handlers through request extensions.
 *
 * # Per-request states
 *
 * ```text
 * Received -> TokenExtracted -> Verified -> Authorized
 *                            \-> Malformed | InvalidSignature | Expired -> Rejected
 * ```
 *
 * A rejected request gets a 401 JSON error and never reaches the handler.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Verify the bearer token in `headers`
///
/// A missing or non-UTF-8 header is treated as an empty string and is
/// therefore rejected as malformed.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenCodec) -> Result<AuthenticatedUser, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    let claims = tokens.verify(header)?;

    let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| {
        tracing::warn!("Token subject is not a user ID");
        BackendError::unauthorized("Invalid or missing token")
    })?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies it with the shared codec
/// 3. Attaches the user to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &app_state.tokens)?;

    tracing::debug!(user_id = %user.user_id, "Request authenticated");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only valid on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Invalid or missing token")
            })?;

        Ok(AuthUser(user))
    }
}
