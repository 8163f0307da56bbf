/**
 * Login Flow
 *
 * Checks a user's credentials against the credential store and mints a
 * bearer token on success.
 *
 * # Process
 *
 * 1. Pick the lookup field: email if given, otherwise username
 * 2. Find exactly one stored credential by that field
 * 3. Verify the password against the stored bcrypt hash
 * 4. Mint a token for the credential's ID
 */

use thiserror::Error;

use crate::backend::auth::sessions::{TokenCodec, TokenError};
use crate::backend::auth::users::{verify_password, CredentialFilter, CredentialStore, PasswordError};
use crate::backend::db::StoreError;

/// Why a login attempt failed
#[derive(Debug, Error)]
pub enum LoginError {
    /// Neither email nor username supplied
    #[error("Email or Username must be provided")]
    BadRequest,

    /// No credential matches the lookup field
    #[error("user not found")]
    NotFound,

    /// Credential exists but the password does not match
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Pick the single filter a login request identifies the user by
///
/// Email wins when both are supplied.
pub fn lookup_filter(email: &str, username: &str) -> Result<CredentialFilter, LoginError> {
    if !email.is_empty() {
        Ok(CredentialFilter::Email(email.to_string()))
    } else if !username.is_empty() {
        Ok(CredentialFilter::Username(username.to_string()))
    } else {
        Err(LoginError::BadRequest)
    }
}

/// Check credentials and mint a token for the matching user
///
/// # Arguments
/// * `store` - credential store to look the user up in
/// * `tokens` - codec used to mint the token
/// * `email` / `username` - lookup fields; at least one must be non-empty
/// * `password` - plaintext password supplied by the client
///
/// # Returns
/// The signed token string (without the `Bearer ` prefix)
pub async fn login<S: CredentialStore>(
    store: &S,
    tokens: &TokenCodec,
    email: &str,
    username: &str,
    password: &str,
) -> Result<String, LoginError> {
    let filter = lookup_filter(email, username)?;

    let credential = store.find_one(filter).await?.ok_or(LoginError::NotFound)?;

    if !verify_password(password.to_string(), credential.password_hash.clone()).await? {
        return Err(LoginError::InvalidCredentials);
    }

    let token = tokens.mint(&credential.id.to_string())?;
    Ok(token)
}
