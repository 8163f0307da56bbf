//! Database Module
//!
//! This module owns the connection pool to the document store that backs
//! users, trips and comments. The pool is created once at startup and
//! injected into every handler through `AppState`; nothing else opens
//! connections.
//!
//! # Timeouts
//!
//! - Connecting is bounded by the configured connect timeout (10s default)
//! - Every individual store operation is bounded by the store timeout
//!   (5s default) through [`Database::run`]
//!
//! # Schema
//!
//! `schema.sql` is applied on every start. All statements are idempotent.

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Per-operation deadline used when none is configured
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection setup deadline used when none is configured
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation did not finish before its deadline
    #[error("store operation '{operation}' timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// A unique constraint rejected the write
    #[error("duplicate value for a unique field")]
    Duplicate,

    /// Any other driver error
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Self::Duplicate,
            _ => Self::Database(err),
        }
    }
}

/// Shared handle to the store
///
/// Cheap to clone; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    op_timeout: Duration,
}

impl Database {
    /// Connect to the store at `url` and apply the schema
    ///
    /// # Arguments
    /// * `url` - connection URI, e.g. `sqlite://trip-planner.db`
    /// * `connect_timeout` - deadline for establishing the pool
    /// * `op_timeout` - deadline applied to every later operation
    pub async fn connect(
        url: &str,
        connect_timeout: Duration,
        op_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let connecting = SqlitePoolOptions::new()
            .acquire_timeout(connect_timeout)
            .connect_with(options);

        let pool = tokio::time::timeout(connect_timeout, connecting)
            .await
            .map_err(|_| StoreError::Timeout {
                operation: "connect",
                timeout: connect_timeout,
            })??;

        let db = Self { pool, op_timeout };
        db.init_schema().await?;

        tracing::info!("Connected to store at {}", url);
        Ok(db)
    }

    /// Open a private in-memory store
    ///
    /// The pool is pinned to one connection that never expires, since each
    /// SQLite memory connection is its own database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            op_timeout: DEFAULT_STORE_TIMEOUT,
        };
        db.init_schema().await?;
        Ok(db)
    }

    /// Get connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run a store operation under the per-operation deadline
    pub async fn run<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        tracing::debug!(operation, "store operation");

        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => {
                tracing::error!(operation, timeout = ?self.op_timeout, "store operation timed out");
                Err(StoreError::Timeout {
                    operation,
                    timeout: self.op_timeout,
                })
            }
        }
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(include_str!("schema.sql"))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
