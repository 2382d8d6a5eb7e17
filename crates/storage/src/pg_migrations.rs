//! PostgreSQL schema migrations for linksaver storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookmarks (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            url TEXT NOT NULL CHECK (url <> ''),
            title TEXT NOT NULL,
            favicon_url TEXT,
            summary TEXT NOT NULL,
            tags JSONB NOT NULL DEFAULT '[]',
            position INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create bookmarks: {e}")))?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_bookmarks_user_position ON bookmarks (user_id, position)",
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create idx_bookmarks_user_position: {e}")))?;

    // Tag filter lookups: tags @> '["rust"]'
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bookmarks_tags ON bookmarks USING GIN (tags)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(format!("create idx_bookmarks_tags: {e}")))?;

    tracing::debug!("PostgreSQL migrations applied");
    Ok(())
}
