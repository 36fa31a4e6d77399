/**
 * Registration Handler
 *
 * POST /api/users — create an account and issue a token.
 *
 * # Registration Process
 *
 * 1. Validate name, email syntax, and password length
 * 2. Reject if the email already has an account
 * 3. Derive the Gravatar URL from the email
 * 4. Hash the password with bcrypt at cost 12
 * 5. Persist the account and issue a signed token
 */

use axum::{extract::State, response::Json};
use serde::Deserialize;

use crate::auth::tokens::issue_token;
use crate::auth::types::TokenResponse;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::avatar::gravatar_url;
use crate::users::store;
use crate::validation::Validator;

const HASH_COST: u32 = 12;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut v = Validator::new();
    v.require(request.name.as_deref(), "name", "Name is required");
    v.require_email(
        request.email.as_deref(),
        "email",
        "Please include a valid email",
    );
    v.require_min_len(
        request.password.as_deref(),
        8,
        "password",
        "Please enter a password with 8 or more characters",
    );
    v.finish()?;

    let name = request.name.unwrap_or_default();
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if store::find_by_email(&state.pool, &email).await?.is_some() {
        tracing::warn!("registration attempt with an email already in use");
        return Err(ApiError::DuplicateUser);
    }

    let avatar = gravatar_url(&email);
    let password_hash = bcrypt::hash(&password, HASH_COST)?;

    let account = store::create_account(&state.pool, &name, &email, &password_hash, &avatar).await?;
    tracing::info!(user_id = %account.id, "account created");

    let token = issue_token(&account.id, &state.config.jwt_secret)?;
    Ok(Json(TokenResponse { token }))
}
