/**
 * Server Configuration
 *
 * All runtime configuration lives in one explicit struct, loaded from the
 * environment once at startup and passed into app construction. Nothing in
 * the handler path reads the environment.
 */

/// Runtime configuration for the server process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port (`PORT`, default 6001).
    pub port: u16,
    /// sqlx connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Shared secret for signing and verifying tokens (`JWT_SECRET`).
    pub jwt_secret: String,
    /// Optional GitHub OAuth app credentials for the repo lookup
    /// (`GITHUB_CLIENT_ID` / `GITHUB_CLIENT_SECRET`).
    pub github_client_id: Option<String>,
    pub github_client_secret: Option<String>,
    /// Base URL of the GitHub API (`GITHUB_API_BASE`). Overridable in tests.
    pub github_api_base: String,
}

impl AppConfig {
    /// Load configuration from the environment, with development defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(6001);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:devconnect.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development fallback");
            "dev-secret-change-in-production".to_string()
        });

        AppConfig {
            port,
            database_url,
            jwt_secret,
            github_client_id: std::env::var("GITHUB_CLIENT_ID").ok(),
            github_client_secret: std::env::var("GITHUB_CLIENT_SECRET").ok(),
            github_api_base: std::env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
        }
    }
}
