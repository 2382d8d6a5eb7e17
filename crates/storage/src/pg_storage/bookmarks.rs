//! BookmarkStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::Utc;
use linksaver_core::{plan_reindex, Bookmark, NewBookmark};

use super::{lock_user, row_to_bookmark, rows_to_usize, PgStorage, BOOKMARK_COLUMNS};
use crate::error::StorageError;
use crate::traits::BookmarkStore;

#[async_trait]
impl BookmarkStore for PgStorage {
    async fn list_bookmarks(&self, user_id: &str) -> Result<Vec<Bookmark>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks
             WHERE user_id = $1
             ORDER BY position ASC, created_at ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_bookmark).collect()
    }

    async fn get_bookmark(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Bookmark>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_bookmark(&r)).transpose()
    }

    async fn append_bookmark(&self, bookmark: &NewBookmark) -> Result<Bookmark, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;
        lock_user(&mut tx, &bookmark.user_id).await?;

        // MAX over zero rows still yields one row, so the first bookmark gets 0.
        let row = sqlx::query(&format!(
            "INSERT INTO bookmarks ({BOOKMARK_COLUMNS})
             SELECT $1, $2, $3, $4, $5, $6, $7, COALESCE(MAX(position) + 1, 0), $8, $8
             FROM bookmarks WHERE user_id = $2
             RETURNING {BOOKMARK_COLUMNS}"
        ))
        .bind(&id)
        .bind(&bookmark.user_id)
        .bind(&bookmark.url)
        .bind(&bookmark.title)
        .bind(&bookmark.favicon_url)
        .bind(&bookmark.summary)
        .bind(serde_json::to_value(&bookmark.tags)?)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        let stored = row_to_bookmark(&row)?;

        tx.commit().await?;
        Ok(stored)
    }

    async fn delete_bookmark(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn reindex_bookmarks(
        &self,
        user_id: &str,
        ordered_ids: &[String],
    ) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await?;
        lock_user(&mut tx, user_id).await?;

        let current: Vec<String> = sqlx::query_scalar(
            "SELECT id FROM bookmarks
             WHERE user_id = $1
             ORDER BY position ASC, created_at ASC
             FOR UPDATE",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;

        let (ids, positions): (Vec<String>, Vec<i32>) =
            plan_reindex(&current, ordered_ids).into_iter().unzip();

        // One statement for the whole set; the user_id filter stays on every row.
        let result = sqlx::query(
            "UPDATE bookmarks AS b
             SET position = u.position, updated_at = NOW()
             FROM UNNEST($1::text[], $2::int4[]) AS u(id, position)
             WHERE b.id = u.id AND b.user_id = $3 AND b.position <> u.position",
        )
        .bind(&ids)
        .bind(&positions)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rows_to_usize(result.rows_affected()))
    }
}
