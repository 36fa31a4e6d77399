/**
 * Account Store
 *
 * Database operations over the `accounts` table.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// A registered account.
///
/// The password hash never leaves the process: it is skipped on
/// serialization, so handlers can return an `Account` directly.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

pub async fn create_account(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
    avatar: &str,
) -> Result<Account, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (id, name, email, password_hash, avatar, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, name, email, password_hash, avatar, created_at
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(avatar)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, name, email, password_hash, avatar, created_at FROM accounts WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, name, email, password_hash, avatar, created_at FROM accounts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_account(pool: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM accounts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
