/**
 * Profile Store
 *
 * Profiles are persisted as JSON documents in the `documents` table under
 * kind `profile`, keyed by owner. Mutations are load-modify-save over the
 * whole document.
 */

use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::profiles::model::Profile;

pub async fn find_by_owner(
    pool: &SqlitePool,
    owner: &str,
) -> Result<Option<Profile>, ApiError> {
    let raw: Option<String> =
        sqlx::query_scalar("SELECT doc FROM documents WHERE kind = 'profile' AND owner = ?")
            .bind(owner)
            .fetch_optional(pool)
            .await?;

    Ok(raw.map(|doc| serde_json::from_str(&doc)).transpose()?)
}

pub async fn find_by_handle(
    pool: &SqlitePool,
    handle: &str,
) -> Result<Option<Profile>, ApiError> {
    let raw: Option<String> = sqlx::query_scalar(
        "SELECT doc FROM documents WHERE kind = 'profile' AND json_extract(doc, '$.handle') = ?",
    )
    .bind(handle)
    .fetch_optional(pool)
    .await?;

    Ok(raw.map(|doc| serde_json::from_str(&doc)).transpose()?)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Profile>, ApiError> {
    let rows: Vec<String> =
        sqlx::query_scalar("SELECT doc FROM documents WHERE kind = 'profile' ORDER BY rowid")
            .fetch_all(pool)
            .await?;

    rows.iter()
        .map(|doc| serde_json::from_str(doc).map_err(ApiError::from))
        .collect()
}

/// Insert the document, or overwrite it if this profile id already exists.
pub async fn save(pool: &SqlitePool, profile: &Profile) -> Result<(), ApiError> {
    let doc = serde_json::to_string(profile)?;

    sqlx::query(
        r#"
        INSERT INTO documents (id, kind, owner, doc, created_at)
        VALUES (?, 'profile', ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET doc = excluded.doc
        "#,
    )
    .bind(&profile.id)
    .bind(&profile.user)
    .bind(&doc)
    .bind(profile.date)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete_by_owner(pool: &SqlitePool, owner: &str) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM documents WHERE kind = 'profile' AND owner = ?")
        .bind(owner)
        .execute(pool)
        .await?;
    Ok(())
}
