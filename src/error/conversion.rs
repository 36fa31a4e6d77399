/**
 * Error Conversion
 *
 * Maps `ApiError` variants to HTTP responses. Client-caused failures render
 * either `{"msg": ...}` or `{"errors": [{msg, param}, ..]}`; everything
 * internal is logged and rendered as an opaque 500.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [{ "msg": "Credentials invalid" }] })),
            )
                .into_response(),
            ApiError::DuplicateUser => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [{ "msg": "User already exists" }] })),
            )
                .into_response(),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "msg": "No token, authorisation failed!" })),
            )
                .into_response(),
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "msg": "Token is invalid" })),
            )
                .into_response(),
            ApiError::NotFound { status, message } => {
                (status, Json(json!({ "msg": message }))).into_response()
            }
            ApiError::Forbidden(message) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "msg": message }))).into_response()
            }
            ApiError::AlreadyLiked => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Post already liked" })),
            )
                .into_response(),
            ApiError::NotLiked => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Post has not been liked" })),
            )
                .into_response(),
            internal => {
                tracing::error!(error = %internal, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "msg": "Server error" })),
                )
                    .into_response()
            }
        }
    }
}
