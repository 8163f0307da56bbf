/**
 * User Credentials and Store Operations
 *
 * This module defines the stored credential record, the lookup contract the
 * login flow depends on, and the store implementation of that contract.
 * Passwords are only ever stored as bcrypt hashes.
 */

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::db::{Database, StoreError};

/// Stored user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Values needed to insert a new credential
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Single-field filter for credential lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialFilter {
    Id(Uuid),
    Email(String),
    Username(String),
}

/// Lookup and insert contract over stored credentials
pub trait CredentialStore {
    /// Find the one credential matching `filter`
    fn find_one(
        &self,
        filter: CredentialFilter,
    ) -> impl Future<Output = Result<Option<Credential>, StoreError>> + Send;

    /// Insert a credential and return its new ID
    fn insert_one(
        &self,
        credential: NewCredential,
    ) -> impl Future<Output = Result<Uuid, StoreError>> + Send;
}

fn credential_from_row(row: &SqliteRow) -> Result<Credential, sqlx::Error> {
    Ok(Credential {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        created_at: row.try_get("created_at")?,
    })
}

impl CredentialStore for Database {
    async fn find_one(&self, filter: CredentialFilter) -> Result<Option<Credential>, StoreError> {
        let query = match &filter {
            CredentialFilter::Id(id) => sqlx::query(
                "SELECT id, email, username, password_hash, created_at FROM users WHERE id = ?",
            )
            .bind(*id),
            CredentialFilter::Email(email) => sqlx::query(
                "SELECT id, email, username, password_hash, created_at FROM users WHERE email = ?",
            )
            .bind(email.clone()),
            CredentialFilter::Username(username) => sqlx::query(
                "SELECT id, email, username, password_hash, created_at FROM users WHERE username = ?",
            )
            .bind(username.clone()),
        };

        let row = self
            .run("users.find_one", query.fetch_optional(self.pool()))
            .await?;

        row.as_ref()
            .map(credential_from_row)
            .transpose()
            .map_err(StoreError::from)
    }

    async fn insert_one(&self, credential: NewCredential) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        self.run(
            "users.insert_one",
            sqlx::query(
                r#"
                INSERT INTO users (id, email, username, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(&credential.email)
            .bind(&credential.username)
            .bind(&credential.password_hash)
            .bind(now)
            .execute(self.pool()),
        )
        .await?;

        Ok(id)
    }
}

/// Errors from password hashing
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a password with bcrypt on the blocking pool
pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Check a password against a stored bcrypt hash on the blocking pool
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, PasswordError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(valid)
}
