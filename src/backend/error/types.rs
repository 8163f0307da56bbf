/**
 * Backend Error Types
 *
 * This module defines the error type every HTTP handler returns. Errors
 * raised by the lower layers (token codec, store, login flow, input
 * validation) are folded into one of five client-facing categories.
 *
 * # Error Categories
 *
 * - `BadRequest` - Malformed or incomplete client input (400)
 * - `Unauthorized` - Missing, invalid or expired credentials (401)
 * - `NotFound` - Resource absent or not owned by the caller (404)
 * - `Conflict` - A unique field is already taken (409)
 * - `Internal` - Store, hashing or signing failure (500)
 *
 * Internal failures are logged where they are converted; the client only
 * ever sees a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::credentials::LoginError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::PasswordError;
use crate::backend::db::StoreError;
use crate::shared::SharedError;

/// Message returned for every failed login, whatever the cause
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use trip_planner::backend::error::BackendError;
///
/// let err = BackendError::not_found("Trip not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Also used when a resource exists but belongs to another user
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Details are logged at conversion time and not carried here
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Internal error with the generic client-facing message
    pub fn internal() -> Self {
        Self::Internal {
            message: INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable category, as sent in the `kind` field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad_request",
            Self::Unauthorized { .. } => "unauthorized",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Internal { .. } => "internal",
        }
    }

    /// Human-readable message, as sent in the `error` field
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Internal { message } => message,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::bad_request(message),
            other @ SharedError::InvalidId { .. } => Self::bad_request(other.to_string()),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        if err.is_rejection() {
            tracing::warn!("Rejected token: {}", err);
            Self::unauthorized(match err {
                TokenError::Expired => "Token expired",
                TokenError::InvalidSignature => "Invalid token signature",
                TokenError::InvalidIssuer => "Invalid token issuer",
                _ => "Invalid or missing token",
            })
        } else {
            tracing::error!("Token error: {:?}", err);
            Self::internal()
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::conflict("Email or username already exists"),
            other => {
                tracing::error!("Store error: {:?}", other);
                Self::internal()
            }
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        Self::internal()
    }
}

impl From<LoginError> for BackendError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::BadRequest => Self::bad_request(err.to_string()),
            LoginError::NotFound | LoginError::InvalidCredentials => {
                Self::unauthorized(INVALID_CREDENTIALS)
            }
            LoginError::Store(e) => e.into(),
            LoginError::Password(e) => e.into(),
            LoginError::Token(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BackendError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BackendError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(BackendError::internal().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_shared_error() {
        let err: BackendError = SharedError::validation("name", "Trip name is required").into();
        assert_eq!(err, BackendError::bad_request("Trip name is required"));

        let err: BackendError = SharedError::invalid_id("trip", "nope").into();
        assert_eq!(err, BackendError::bad_request("Invalid trip ID format"));
    }

    #[test]
    fn test_token_rejections_are_unauthorized() {
        for err in [
            TokenError::MalformedToken,
            TokenError::InvalidSignature,
            TokenError::InvalidIssuer,
            TokenError::Expired,
        ] {
            assert_eq!(BackendError::from(err).status_code(), StatusCode::UNAUTHORIZED);
        }
        assert_eq!(
            BackendError::from(TokenError::EmptySubject).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_login_failures_share_one_message() {
        let not_found: BackendError = LoginError::NotFound.into();
        let wrong_password: BackendError = LoginError::InvalidCredentials.into();
        assert_eq!(not_found, wrong_password);
        assert_eq!(not_found.message(), INVALID_CREDENTIALS);

        let missing: BackendError = LoginError::BadRequest.into();
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_errors() {
        assert_eq!(BackendError::from(StoreError::Duplicate).kind(), "conflict");

        let timeout = StoreError::Timeout {
            operation: "trips.find",
            timeout: std::time::Duration::from_secs(5),
        };
        let err = BackendError::from(timeout);
        assert_eq!(err.kind(), "internal");
        assert!(!err.message().contains("trips.find"));
    }
}
