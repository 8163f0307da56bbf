/**
 * Server Initialization
 *
 * This module builds the application state and the router from a loaded
 * `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Connect to the store and apply the schema
 * 2. Build the token codec from the configured secret
 * 3. Create the router with all routes
 *
 * The store is required; a failed connection stops startup.
 */

use axum::Router;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::db::{Database, StoreError};
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Build the token codec described by `config`
pub fn token_codec(config: &ServerConfig) -> TokenCodec {
    TokenCodec::new(
        config.jwt_secret.as_bytes(),
        config.token_issuer.clone(),
        config.token_ttl,
    )
}

/// Connect to the store and assemble the application state
pub async fn create_state(config: &ServerConfig) -> Result<AppState, StoreError> {
    tracing::info!("Connecting to store...");

    let db = Database::connect(&config.database_url, config.connect_timeout, config.store_timeout)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to store: {:?}", e);
            e
        })?;

    let tokens = token_codec(config);
    tracing::info!(
        "Tokens issued as '{}', valid for {} hours",
        tokens.issuer(),
        tokens.ttl().num_hours()
    );

    Ok(AppState::new(db, tokens, config.bcrypt_cost))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing trip planner backend");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
