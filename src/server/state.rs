/**
 * Application State
 *
 * `AppState` is the central state container shared by all handlers: the
 * database pool, the configuration, and one reqwest client reused for
 * upstream calls. Everything here is read-only after startup; per-request
 * work owns its own data.
 *
 * The `FromRef` implementations let extractors pull just the part of the
 * state they need, following Axum's recommended pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::server::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
