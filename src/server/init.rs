/**
 * Server Initialization
 *
 * Assembles the application: database pool, shared state, router. The
 * configuration is taken by value so construction has no ambient inputs;
 * tests pass their own `AppConfig` pointing at an in-memory database.
 */

use std::sync::Arc;

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::db;
use crate::server::state::AppState;

/// Build the application router from a configuration.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    let pool = db::connect(&config.database_url).await?;

    let state = AppState {
        pool,
        config: Arc::new(config),
        http: reqwest::Client::new(),
    };

    Ok(create_router(state))
}
