/**
 * Login Handler
 *
 * POST /api/auth/login — verify email and password, issue a token.
 *
 * Unknown email and wrong password produce byte-identical responses so the
 * endpoint cannot be used to enumerate accounts; the two cases are only
 * distinguished in the logs.
 */

use axum::{extract::State, response::Json};

use crate::auth::tokens::issue_token;
use crate::auth::types::{LoginRequest, TokenResponse};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::store;
use crate::validation::Validator;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut v = Validator::new();
    v.require_email(
        request.email.as_deref(),
        "email",
        "Please include a valid email",
    );
    v.require(request.password.as_deref(), "password", "Password is required");
    v.finish()?;

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let Some(account) = store::find_by_email(&state.pool, &email).await? else {
        tracing::warn!("login attempt for unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !bcrypt::verify(&password, &account.password_hash)? {
        tracing::warn!(user_id = %account.id, "login attempt with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = issue_token(&account.id, &state.config.jwt_secret)?;
    tracing::info!(user_id = %account.id, "user logged in");

    Ok(Json(TokenResponse { token }))
}
