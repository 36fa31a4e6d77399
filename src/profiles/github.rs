/**
 * GitHub Repository Lookup
 *
 * GET /api/profile/github/{username} — fetch the user's five oldest repos
 * from the GitHub API and pass the body through verbatim. Credentials, when
 * configured, ride along as query parameters. The base URL comes from the
 * configuration so tests can point it at a local mock.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::error::ApiError;
use crate::server::state::AppState;

pub async fn github_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, ApiError> {
    // The path segment is re-encoded so a decoded `?` or `&` in the username
    // cannot reach the upstream as query syntax.
    let username = percent_encode(username.as_bytes(), NON_ALPHANUMERIC);
    let mut url = format!(
        "{}/users/{}/repos?per_page=5&sort=created:asc",
        state.config.github_api_base, username
    );
    if let (Some(client_id), Some(client_secret)) = (
        &state.config.github_client_id,
        &state.config.github_client_secret,
    ) {
        url.push_str(&format!(
            "&client_id={client_id}&client_secret={client_secret}"
        ));
    }

    let response = state
        .http
        .get(&url)
        .header(reqwest::header::USER_AGENT, "devconnect")
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "github answered non-success");
        return Err(ApiError::not_found(
            StatusCode::NOT_FOUND,
            "No Github profile was found",
        ));
    }

    Ok(Json(response.json().await?))
}
