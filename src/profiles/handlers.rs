/**
 * Profile Route Handlers
 *
 * Profile CRUD plus the experience/education sub-lists and account deletion.
 *
 * Read routes populate the owning account as a `{id, name, avatar}` object
 * (null when the account no longer exists); mutation routes return the raw
 * document with the owner as an id string.
 *
 * The profile-flavored NotFound responses use status 400, an inconsistency
 * with the post routes that is part of the API contract.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::profiles::model::{Education, Experience, Profile, ProfileUpdate};
use crate::profiles::store;
use crate::server::state::AppState;
use crate::users;
use crate::validation::Validator;

const NO_PROFILE: &str = "There is no profile for this user";

/// Replace the owner id with a `{id, name, avatar}` summary for read routes.
async fn populate_owner(pool: &SqlitePool, profile: Profile) -> Result<Value, ApiError> {
    let account = users::store::find_by_id(pool, &profile.user).await?;
    let mut doc = serde_json::to_value(&profile)?;

    doc["user"] = match account {
        Some(account) => json!({
            "id": account.id,
            "name": account.name,
            "avatar": account.avatar,
        }),
        // Accounts can be deleted without cascading to posts or lookups;
        // a dangling owner populates as null.
        None => Value::Null,
    };

    Ok(doc)
}

/// GET /api/profile/me
pub async fn my_profile(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let profile = store::find_by_owner(&state.pool, &user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, NO_PROFILE))?;

    Ok(Json(populate_owner(&state.pool, profile).await?))
}

/// GET /api/profile
pub async fn all_profiles(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let profiles = store::list(&state.pool).await?;

    let mut populated = Vec::with_capacity(profiles.len());
    for profile in profiles {
        populated.push(populate_owner(&state.pool, profile).await?);
    }

    Ok(Json(populated))
}

/// GET /api/profile/handle/{handle}
pub async fn profile_by_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let profile = store::find_by_handle(&state.pool, &handle)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::NOT_FOUND, NO_PROFILE))?;

    Ok(Json(populate_owner(&state.pool, profile).await?))
}

/// GET /api/profile/user/{user_id}
///
/// A malformed id cannot match any owner, so it falls into the same 400 as
/// an absent profile.
pub async fn profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let profile = store::find_by_owner(&state.pool, &user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, "Profile not found"))?;

    Ok(Json(populate_owner(&state.pool, profile).await?))
}

/// POST /api/profile — create-or-update the caller's profile.
pub async fn upsert_profile(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Profile>, ApiError> {
    let mut v = Validator::new();
    v.require(update.status.as_deref(), "status", "Status is required");
    v.require(update.skills.as_deref(), "skills", "Skills is required");
    v.finish()?;

    let profile = match store::find_by_owner(&state.pool, &user.user_id).await? {
        Some(mut existing) => {
            existing.apply(update);
            existing
        }
        None => Profile::new(&user.user_id, update),
    };

    store::save(&state.pool, &profile).await?;
    tracing::info!(user_id = %user.user_id, "profile upserted");

    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct ExperienceRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// PUT /api/profile/experience — insert at the head of the list.
pub async fn add_experience(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<ExperienceRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut v = Validator::new();
    v.require(request.title.as_deref(), "title", "title is required");
    v.require(request.company.as_deref(), "company", "company is required");
    v.require(request.from.as_deref(), "from", "from date is required");
    v.finish()?;

    let mut profile = store::find_by_owner(&state.pool, &user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, NO_PROFILE))?;

    profile.experience.insert(
        0,
        Experience {
            id: Uuid::new_v4().to_string(),
            title: request.title.unwrap_or_default(),
            company: request.company.unwrap_or_default(),
            location: request.location,
            from: request.from.unwrap_or_default(),
            to: request.to,
            current: request.current,
            description: request.description,
        },
    );

    store::save(&state.pool, &profile).await?;
    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct EducationRequest {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default, rename = "fieldOfStudy")]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// PUT /api/profile/education — insert at the head of the list.
pub async fn add_education(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<EducationRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut v = Validator::new();
    v.require(request.school.as_deref(), "school", "school is required");
    v.require(
        request.field_of_study.as_deref(),
        "fieldOfStudy",
        "Field of study is required",
    );
    v.require(request.from.as_deref(), "from", "from date is required");
    v.finish()?;

    let mut profile = store::find_by_owner(&state.pool, &user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, NO_PROFILE))?;

    profile.education.insert(
        0,
        Education {
            id: Uuid::new_v4().to_string(),
            school: request.school.unwrap_or_default(),
            course: request.course,
            field_of_study: request.field_of_study.unwrap_or_default(),
            from: request.from.unwrap_or_default(),
            to: request.to,
            current: request.current,
            description: request.description,
        },
    );

    store::save(&state.pool, &profile).await?;
    Ok(Json(profile))
}

/// DELETE /api/profile/experience/{exp_id}
///
/// An id with no matching entry is a silent no-op that still returns the
/// profile with 200.
pub async fn remove_experience(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = store::find_by_owner(&state.pool, &user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, NO_PROFILE))?;

    if let Some(index) = profile.experience.iter().position(|entry| entry.id == exp_id) {
        profile.experience.remove(index);
        store::save(&state.pool, &profile).await?;
    }

    Ok(Json(profile))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = store::find_by_owner(&state.pool, &user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, NO_PROFILE))?;

    if let Some(index) = profile.education.iter().position(|entry| entry.id == edu_id) {
        profile.education.remove(index);
        store::save(&state.pool, &profile).await?;
    }

    Ok(Json(profile))
}

/// DELETE /api/profile — remove the caller's profile and account.
///
/// Posts are intentionally left behind; their author references dangle.
pub async fn delete_account(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    store::delete_by_owner(&state.pool, &user.user_id).await?;
    users::store::delete_account(&state.pool, &user.user_id).await?;
    tracing::info!(user_id = %user.user_id, "account deleted");

    Ok(Json(json!({ "msg": "User deleted" })))
}
