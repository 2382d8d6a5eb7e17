mod ingest;

use std::sync::Arc;

use linksaver_core::{count_tags, validate_order, Bookmark, BookmarkQuery, TagCount};
use linksaver_fetch::{FetchConfig, PageFetcher, SummaryGenerator};
use linksaver_storage::{BookmarkStore, StorageBackend};

use crate::ServiceError;

pub struct BookmarkService {
    pub(crate) storage: Arc<StorageBackend>,
    pub(crate) fetcher: PageFetcher,
    pub(crate) summarizer: SummaryGenerator,
}

impl BookmarkService {
    #[must_use]
    pub const fn new(
        storage: Arc<StorageBackend>,
        fetcher: PageFetcher,
        summarizer: SummaryGenerator,
    ) -> Self {
        Self { storage, fetcher, summarizer }
    }

    /// Build the fetch clients from `config` and wire them to `storage`.
    pub fn from_config(
        storage: Arc<StorageBackend>,
        config: &FetchConfig,
    ) -> Result<Self, ServiceError> {
        let fetcher =
            PageFetcher::new(config).map_err(|e| ServiceError::NotConfigured(e.to_string()))?;
        let summarizer =
            SummaryGenerator::new(config).map_err(|e| ServiceError::NotConfigured(e.to_string()))?;
        Ok(Self::new(storage, fetcher, summarizer))
    }

    #[must_use]
    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    /// The caller's bookmarks, filtered and sorted by `query`.
    pub async fn list(
        &self,
        user_id: &str,
        query: &BookmarkQuery,
    ) -> Result<Vec<Bookmark>, ServiceError> {
        let bookmarks = self.storage.list_bookmarks(user_id).await?;
        if query.is_identity() {
            return Ok(bookmarks);
        }
        Ok(query.apply(bookmarks))
    }

    pub async fn get(&self, user_id: &str, id: &str) -> Result<Bookmark, ServiceError> {
        self.storage
            .get_bookmark(user_id, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("bookmark {id}")))
    }

    /// Remove one of the caller's bookmarks. `false` when the caller owns no
    /// such row; foreign rows are never touched.
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<bool, ServiceError> {
        let deleted = self.storage.delete_bookmark(user_id, id).await?;
        tracing::info!(user_id, id, deleted, "bookmark delete");
        Ok(deleted)
    }

    /// Rewrite the caller's positions to follow `ordered_ids`, atomically.
    ///
    /// Returns how many rows changed position.
    pub async fn reorder(&self, user_id: &str, ordered_ids: &[String]) -> Result<usize, ServiceError> {
        validate_order(ordered_ids)?;
        let moved = self.storage.reindex_bookmarks(user_id, ordered_ids).await?;
        tracing::info!(user_id, submitted = ordered_ids.len(), moved, "bookmarks reordered");
        Ok(moved)
    }

    pub async fn tags(&self, user_id: &str) -> Result<Vec<TagCount>, ServiceError> {
        let bookmarks = self.storage.list_bookmarks(user_id).await?;
        Ok(count_tags(&bookmarks))
    }
}
