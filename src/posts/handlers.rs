/**
 * Post Route Handlers
 *
 * Post CRUD plus likes and comments. All routes require authentication.
 * Like/unlike and comment routes answer with the mutated sub-list, not the
 * whole post; delete routes answer with a confirmation message.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::model::{Comment, Like, Post};
use crate::posts::store;
use crate::server::state::AppState;
use crate::users;
use crate::validation::Validator;

const POST_NOT_FOUND: &str = "Post not found";

async fn load_post(state: &AppState, id: &str) -> Result<Post, ApiError> {
    store::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::NOT_FOUND, POST_NOT_FOUND))
}

async fn load_caller(state: &AppState, user_id: &str) -> Result<users::Account, ApiError> {
    users::store::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::NOT_FOUND, "User not found"))
}

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /api/posts
pub async fn create_post(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> Result<Json<Post>, ApiError> {
    let mut v = Validator::new();
    v.require(request.text.as_deref(), "text", "Text is required");
    v.finish()?;

    let author = load_caller(&state, &user.user_id).await?;
    let post = Post::new(&author, request.text.unwrap_or_default());

    store::save(&state.pool, &post).await?;
    tracing::info!(user_id = %user.user_id, post_id = %post.id, "post created");

    Ok(Json(post))
}

/// GET /api/posts — most recent first.
pub async fn list_posts(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(store::list(&state.pool).await?))
}

/// GET /api/posts/{id}
pub async fn get_post(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(load_post(&state, &id).await?))
}

/// DELETE /api/posts/{id} — author only.
pub async fn delete_post(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let post = load_post(&state, &id).await?;

    if post.user != user.user_id {
        tracing::warn!(user_id = %user.user_id, post_id = %id, "non-author delete refused");
        return Err(ApiError::forbidden("User is not authorised"));
    }

    store::delete(&state.pool, &id).await?;
    Ok(Json(json!({ "msg": "Post removed" })))
}

/// PUT /api/posts/like/{id}
pub async fn like_post(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let mut post = load_post(&state, &id).await?;

    if post.is_liked_by(&user.user_id) {
        return Err(ApiError::AlreadyLiked);
    }
    post.push_like(&user.user_id);

    store::save(&state.pool, &post).await?;
    Ok(Json(post.likes))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, ApiError> {
    let mut post = load_post(&state, &id).await?;

    if !post.pull_like(&user.user_id) {
        return Err(ApiError::NotLiked);
    }

    store::save(&state.pool, &post).await?;
    Ok(Json(post.likes))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PostRequest>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let mut v = Validator::new();
    v.require(request.text.as_deref(), "text", "Text is required");
    v.finish()?;

    let author = load_caller(&state, &user.user_id).await?;
    let mut post = load_post(&state, &id).await?;

    post.push_comment(&author, request.text.unwrap_or_default());

    store::save(&state.pool, &post).await?;
    Ok(Json(post.comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
///
/// The named comment must exist and belong to the caller, but removal then
/// keys on the caller id and takes their first comment on the post. That is
/// the contract as shipped; see `Post::pull_first_comment_by`.
pub async fn delete_comment(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let mut post = load_post(&state, &id).await?;

    let comment = post
        .find_comment(&comment_id)
        .ok_or_else(|| ApiError::not_found(StatusCode::NOT_FOUND, "Comment does not exist"))?;

    if comment.user != user.user_id {
        tracing::warn!(user_id = %user.user_id, post_id = %id, "non-author comment delete refused");
        return Err(ApiError::forbidden("User not authorised"));
    }

    post.pull_first_comment_by(&user.user_id);

    store::save(&state.pool, &post).await?;
    Ok(Json(post.comments))
}
