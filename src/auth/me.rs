/**
 * Current-User Handler
 *
 * GET /api/auth — return the authenticated caller's account. The password
 * hash is skipped by the account's serialization, never by the handler.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::store::{self, Account};

pub async fn current_user(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Account>, ApiError> {
    let account = store::find_by_id(&state.pool, &user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::NOT_FOUND, "User not found"))?;

    Ok(Json(account))
}
