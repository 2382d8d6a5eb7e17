use async_trait::async_trait;
use linksaver_core::{Bookmark, NewBookmark};

use crate::error::StorageError;

/// Bookmark persistence. Every method is scoped to one owner: no call may read
/// or mutate a row whose `user_id` differs from the one passed in.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All of the user's bookmarks, `position` ascending (ties by `created_at`).
    async fn list_bookmarks(&self, user_id: &str) -> Result<Vec<Bookmark>, StorageError>;

    /// One bookmark, if it exists and belongs to the user.
    async fn get_bookmark(&self, user_id: &str, id: &str)
        -> Result<Option<Bookmark>, StorageError>;

    /// Insert a bookmark at the end of the user's list.
    ///
    /// The store assigns `id`, timestamps and `position = max + 1` (0 for the
    /// first bookmark). Reading the max and inserting happen under one
    /// per-user lock, so concurrent appends never share a position.
    async fn append_bookmark(&self, bookmark: &NewBookmark) -> Result<Bookmark, StorageError>;

    /// Delete a bookmark. Returns `true` if a row owned by the user was removed.
    async fn delete_bookmark(&self, user_id: &str, id: &str) -> Result<bool, StorageError>;

    /// Rewrite the positions of the user's bookmarks to follow `ordered_ids`,
    /// as planned by `linksaver_core::plan_reindex`. All writes commit or none
    /// do. Returns the number of rows whose position changed.
    async fn reindex_bookmarks(
        &self,
        user_id: &str,
        ordered_ids: &[String],
    ) -> Result<usize, StorageError>;
}
