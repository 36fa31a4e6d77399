use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`. Fields are optional so missing ones are
/// reported by validation instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful registration and login both answer with just the token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
