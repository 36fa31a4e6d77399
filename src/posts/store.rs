/**
 * Post Store
 *
 * Posts are persisted as JSON documents in the `documents` table under kind
 * `post`. Like the profile store, mutations are load-modify-save.
 */

use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::posts::model::Post;

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Post>, ApiError> {
    let raw: Option<String> =
        sqlx::query_scalar("SELECT doc FROM documents WHERE kind = 'post' AND id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(raw.map(|doc| serde_json::from_str(&doc)).transpose()?)
}

/// All posts, most recent first. The rowid tiebreak keeps same-timestamp
/// inserts in reverse insertion order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Post>, ApiError> {
    let rows: Vec<String> = sqlx::query_scalar(
        "SELECT doc FROM documents WHERE kind = 'post' ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|doc| serde_json::from_str(doc).map_err(ApiError::from))
        .collect()
}

/// Insert the document, or overwrite it if this post id already exists.
pub async fn save(pool: &SqlitePool, post: &Post) -> Result<(), ApiError> {
    let doc = serde_json::to_string(post)?;

    sqlx::query(
        r#"
        INSERT INTO documents (id, kind, owner, doc, created_at)
        VALUES (?, 'post', ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET doc = excluded.doc
        "#,
    )
    .bind(&post.id)
    .bind(&post.user)
    .bind(&doc)
    .bind(post.date)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: &str) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM documents WHERE kind = 'post' AND id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
