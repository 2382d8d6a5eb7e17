//! In-process storage backend.
//!
//! Used when no `DATABASE_URL` is configured and as the backend for service and
//! router tests. One `RwLock` guards the whole map, which makes every append
//! and reindex atomic with respect to the others.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use linksaver_core::{next_position, plan_reindex, Bookmark, NewBookmark};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::BookmarkStore;

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    /// user_id -> that user's rows, unordered
    rows: Arc<RwLock<HashMap<String, Vec<Bookmark>>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStorage {
    async fn list_bookmarks(&self, user_id: &str) -> Result<Vec<Bookmark>, StorageError> {
        let rows = self.rows.read().await;
        let mut list = rows.get(user_id).cloned().unwrap_or_default();
        list.sort_by(|a, b| {
            a.position.cmp(&b.position).then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(list)
    }

    async fn get_bookmark(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Bookmark>, StorageError> {
        let rows = self.rows.read().await;
        Ok(rows.get(user_id).and_then(|list| list.iter().find(|b| b.id == id)).cloned())
    }

    async fn append_bookmark(&self, bookmark: &NewBookmark) -> Result<Bookmark, StorageError> {
        let mut rows = self.rows.write().await;
        let list = rows.entry(bookmark.user_id.clone()).or_default();
        let position = next_position(list.iter().map(|b| b.position).max());
        let stored = bookmark.clone().into_bookmark(
            uuid::Uuid::new_v4().to_string(),
            position,
            Utc::now(),
        );
        list.push(stored.clone());
        Ok(stored)
    }

    async fn delete_bookmark(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        let mut rows = self.rows.write().await;
        let Some(list) = rows.get_mut(user_id) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|b| b.id != id);
        Ok(list.len() < before)
    }

    async fn reindex_bookmarks(
        &self,
        user_id: &str,
        ordered_ids: &[String],
    ) -> Result<usize, StorageError> {
        let mut rows = self.rows.write().await;
        let Some(list) = rows.get_mut(user_id) else {
            return Ok(0);
        };
        list.sort_by(|a, b| {
            a.position.cmp(&b.position).then_with(|| a.created_at.cmp(&b.created_at))
        });
        let current: Vec<String> = list.iter().map(|b| b.id.clone()).collect();
        let plan: HashMap<String, i32> = plan_reindex(&current, ordered_ids).into_iter().collect();

        let now = Utc::now();
        let mut changed = 0usize;
        for bookmark in list.iter_mut() {
            if let Some(&position) = plan.get(&bookmark.id) {
                if bookmark.position != position {
                    bookmark.position = position;
                    bookmark.updated_at = now;
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }
}
