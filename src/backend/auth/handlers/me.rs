/**
 * Get Current User Handler
 *
 * Handler for GET /me. Runs behind the auth middleware, so the user ID
 * comes from the verified token; the record is then read from the store.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::{CredentialFilter, CredentialStore};
use crate::backend::db::Database;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Token missing or invalid (from the middleware)
/// * `404 Not Found` - The token's user no longer exists
pub async fn get_me(
    State(db): State<Database>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let credential = db
        .find_one(CredentialFilter::Id(user.user_id))
        .await?
        .ok_or_else(|| {
            tracing::warn!("User from token not found: {}", user.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(credential.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::NewCredential;
    use crate::backend::middleware::AuthenticatedUser;
    use axum::http::StatusCode;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_get_me_returns_public_fields() {
        let db = Database::in_memory().await.unwrap();
        let id = db
            .insert_one(NewCredential {
                email: "a@x.com".into(),
                username: "alice".into(),
                password_hash: "hash".into(),
            })
            .await
            .unwrap();

        let Json(me) = get_me(State(db), AuthUser(AuthenticatedUser { user_id: id }))
            .await
            .unwrap();
        assert_eq!(
            me,
            UserResponse {
                id: id.to_string(),
                email: "a@x.com".into(),
                username: "alice".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_me_for_deleted_user() {
        let db = Database::in_memory().await.unwrap();
        let err = get_me(
            State(db),
            AuthUser(AuthenticatedUser {
                user_id: Uuid::new_v4(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
