/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * register, login and current-user handlers.
 *
 * Request fields default to empty strings so that a missing field is
 * reported by validation as a 400 rather than rejected by the JSON
 * extractor.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::Credential;
use crate::shared::error::{require_non_empty, SharedError};

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// Check all fields are present and the email is plausible
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("email", &self.email)?;
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)?;

        if !self.email.contains('@') {
            return Err(SharedError::validation("email", "Invalid email format"));
        }
        Ok(())
    }
}

/// Login request
///
/// Either `email` or `username` identifies the user; email is used when
/// both are present.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed token, to be sent back as `Authorization: Bearer <token>`
    pub token: String,
}

/// User response (without sensitive data)
///
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub email: String,
    pub username: String,
}

impl From<Credential> for UserResponse {
    fn from(credential: Credential) -> Self {
        Self {
            id: credential.id.to_string(),
            email: credential.email,
            username: credential.username,
        }
    }
}
