/**
 * Authentication Gate
 *
 * Protected routes carry a signed token in the `x-auth-token` header. The
 * gate verifies signature and expiry against the configured secret and hands
 * the embedded account id to the handler.
 *
 * It is implemented as an extractor rather than a layer because several paths
 * mix public and private methods (`/api/profile` is public on GET, private on
 * POST and DELETE); a handler opts in by taking an `AuthUser` parameter.
 *
 * A missing header and a rejected token map to the same 401 status but are
 * distinct failures, logged separately.
 */

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Header carrying the token on protected routes.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Identity attached to a request that passed the gate.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Extractor form of the gate. Verification happens per request; the gate
/// itself is stateless and has no side effects.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppConfig>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AppConfig>::from_ref(state);

        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("protected route called without {AUTH_HEADER} header");
                ApiError::Unauthenticated
            })?;

        let claims = verify_token(token, &config.jwt_secret).map_err(|err| {
            tracing::warn!(error = %err, "token rejected");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser(AuthenticatedUser {
            user_id: claims.user.id,
        }))
    }
}
