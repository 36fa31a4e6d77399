use axum::http::StatusCode;
use thiserror::Error;

use crate::validation::FieldError;

/// Error taxonomy for the HTTP API.
///
/// Input and business-rule failures carry enough context to render the
/// user-facing JSON body. Driver, hashing, token and upstream failures are
/// wrapped via `#[from]` and all collapse to an opaque 500; their detail is
/// logged at the conversion boundary, never returned to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields failed validation.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Protected route called without an `x-auth-token` header.
    #[error("no token supplied")]
    Unauthenticated,

    /// Token present but failed signature or expiry verification.
    #[error("token rejected")]
    InvalidToken,

    /// Login failed. Covers both unknown email and wrong password so the
    /// response cannot be used to enumerate accounts.
    #[error("credentials invalid")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    #[error("user already exists")]
    DuplicateUser,

    /// Requested entity is absent or the identifier is malformed. The status
    /// differs per route (400 on profile routes, 404 elsewhere).
    #[error("{message}")]
    NotFound { status: StatusCode, message: String },

    /// Caller is authenticated but does not own the target entity.
    #[error("{0}")]
    Forbidden(String),

    /// Caller's id is already present in the post's likes list.
    #[error("post already liked")]
    AlreadyLiked,

    /// Caller's id is absent from the post's likes list.
    #[error("post has not been liked")]
    NotLiked,

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a `NotFound` with the status the route in question uses.
    pub fn not_found(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::NotFound {
            status,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }
}
