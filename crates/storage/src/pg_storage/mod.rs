//! PostgreSQL storage backend using sqlx.

mod bookmarks;

use std::time::Duration;

use chrono::{DateTime, Utc};
use linksaver_core::{
    Bookmark, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, then apply migrations.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Serialize appends and reindexes of one user's bookmarks for the rest of `tx`.
pub(crate) async fn lock_user(
    tx: &mut Transaction<'_, Postgres>,
    user_id: &str,
) -> Result<(), StorageError> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(user_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

pub(crate) fn row_to_bookmark(row: &PgRow) -> Result<Bookmark, StorageError> {
    let tags: serde_json::Value = row.try_get("tags")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Bookmark {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        url: row.try_get("url")?,
        title: row.try_get("title")?,
        favicon_url: row.try_get("favicon_url")?,
        summary: row.try_get("summary")?,
        tags: serde_json::from_value(tags)?,
        position: row.try_get("position")?,
        created_at,
        updated_at,
    })
}

/// Saturating `u64` → `usize` for `rows_affected`.
pub(crate) fn rows_to_usize(rows: u64) -> usize {
    usize::try_from(rows).unwrap_or(usize::MAX)
}

pub(crate) const BOOKMARK_COLUMNS: &str =
    "id, user_id, url, title, favicon_url, summary, tags, position, created_at, updated_at";
