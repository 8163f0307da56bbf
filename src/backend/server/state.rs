/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds everything handlers share, all of it read-only after
 * startup:
 * - The store handle (`Database`, wrapping a connection pool)
 * - The token codec, behind an `Arc`
 * - The bcrypt cost used at registration
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(db): State<Database>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::db::Database;

/// Password hashing cost, wrapped so it can be extracted from state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCost(pub u32);

/// Application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Store handle shared by every handler
    pub db: Database,
    /// Token codec built from the configured secret
    pub tokens: Arc<TokenCodec>,
    /// bcrypt cost for new passwords
    pub password_cost: PasswordCost,
}

impl AppState {
    pub fn new(db: Database, tokens: TokenCodec, password_cost: u32) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            password_cost: PasswordCost(password_cost),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordCost {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.password_cost
    }
}
