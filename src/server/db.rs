/**
 * Database Setup
 *
 * Connects the SQLite pool and creates the schema at startup. Persisted state
 * is two tables: `accounts` holds user credentials relationally, `documents`
 * is a denormalized JSON store holding profile and post documents keyed by
 * kind and owner.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id            TEXT PRIMARY KEY,
        name          TEXT NOT NULL,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        avatar        TEXT NOT NULL,
        created_at    TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS documents (
        id         TEXT PRIMARY KEY,
        kind       TEXT NOT NULL,
        owner      TEXT NOT NULL,
        doc        TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_documents_kind_owner ON documents (kind, owner)",
];

/// Connect the pool and make sure the schema exists.
///
/// The pool is capped at a single connection: an in-memory SQLite database
/// exists per connection, and a single writer sidesteps `SQLITE_BUSY` on the
/// load-modify-save document updates.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    tracing::info!("database ready");

    Ok(pool)
}

/// Apply the startup schema. Every statement is idempotent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
