/**
 * Router Configuration
 *
 * The full route table in one place. Whether a route is protected is decided
 * by its handler's signature: handlers that take an `AuthUser` parameter sit
 * behind the auth gate, the rest are public. Several paths mix public and
 * private methods (`/api/profile` is public on GET, private on POST/DELETE).
 */

use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth;
use crate::posts;
use crate::profiles;
use crate::server::state::AppState;
use crate::users;

/// Health check kept at the root, answering a bare 200.
async fn health() -> StatusCode {
    StatusCode::OK
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        // Users & auth
        .route("/api/users", post(users::register))
        .route("/api/auth", get(auth::current_user))
        .route("/api/auth/login", post(auth::login))
        // Profiles
        .route(
            "/api/profile",
            get(profiles::handlers::all_profiles)
                .post(profiles::handlers::upsert_profile)
                .delete(profiles::handlers::delete_account),
        )
        .route("/api/profile/me", get(profiles::handlers::my_profile))
        .route(
            "/api/profile/handle/{handle}",
            get(profiles::handlers::profile_by_handle),
        )
        .route(
            "/api/profile/user/{user_id}",
            get(profiles::handlers::profile_by_user),
        )
        .route(
            "/api/profile/experience",
            put(profiles::handlers::add_experience),
        )
        .route(
            "/api/profile/experience/{exp_id}",
            delete(profiles::handlers::remove_experience),
        )
        .route(
            "/api/profile/education",
            put(profiles::handlers::add_education),
        )
        .route(
            "/api/profile/education/{edu_id}",
            delete(profiles::handlers::remove_education),
        )
        .route(
            "/api/profile/github/{username}",
            get(profiles::github::github_repos),
        )
        // Posts
        .route(
            "/api/posts",
            get(posts::handlers::list_posts).post(posts::handlers::create_post),
        )
        .route(
            "/api/posts/{id}",
            get(posts::handlers::get_post).delete(posts::handlers::delete_post),
        )
        .route("/api/posts/like/{id}", put(posts::handlers::like_post))
        .route("/api/posts/unlike/{id}", put(posts::handlers::unlike_post))
        .route(
            "/api/posts/comment/{id}",
            post(posts::handlers::add_comment),
        )
        .route(
            "/api/posts/comment/{id}/{comment_id}",
            delete(posts::handlers::delete_comment),
        )
        .with_state(state)
}
