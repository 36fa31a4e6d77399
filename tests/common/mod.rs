//! Shared helpers for the endpoint tests.
//!
//! Each test spins up its own app over a fresh in-memory database, so suites
//! run hermetically and in parallel.

// Not every test crate uses every helper.
#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use devconnect::server::config::AppConfig;

pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        github_client_id: None,
        github_client_secret: None,
        // Unroutable unless a test points it at a mock.
        github_api_base: "http://127.0.0.1:1".to_string(),
    }
}

pub async fn spawn_server() -> TestServer {
    spawn_server_with(test_config()).await
}

pub async fn spawn_server_with(config: AppConfig) -> TestServer {
    let app = devconnect::create_app(config)
        .await
        .expect("app should build");
    TestServer::new(app).expect("test server should start")
}

/// Register an account and return its token.
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> String {
    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("registration should return a token")
        .to_string()
}

/// Create a minimal profile for the token's account.
pub async fn create_profile(server: &TestServer, token: &str, status: &str, skills: &str) {
    let response = server
        .post("/api/profile")
        .add_header("x-auth-token", token)
        .json(&serde_json::json!({ "status": status, "skills": skills }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/// Create a post and return its id.
pub async fn create_post(server: &TestServer, token: &str, text: &str) -> String {
    let response = server
        .post("/api/posts")
        .add_header("x-auth-token", token)
        .json(&serde_json::json!({ "text": text }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    body["id"]
        .as_str()
        .expect("post should have an id")
        .to_string()
}
