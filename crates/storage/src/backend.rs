//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use linksaver_core::{Bookmark, NewBookmark};

use crate::error::StorageError;
use crate::traits::BookmarkStore;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <crate::memory::MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(crate::pg_storage::PgStorage),
    Memory(crate::memory::MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::memory::MemoryStorage::new())
    }

    /// Short backend name for logs and readiness output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl BookmarkStore for StorageBackend {
    async fn list_bookmarks(&self, user_id: &str) -> Result<Vec<Bookmark>, StorageError> {
        dispatch!(self, BookmarkStore, list_bookmarks(user_id))
    }

    async fn get_bookmark(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Bookmark>, StorageError> {
        dispatch!(self, BookmarkStore, get_bookmark(user_id, id))
    }

    async fn append_bookmark(&self, bookmark: &NewBookmark) -> Result<Bookmark, StorageError> {
        dispatch!(self, BookmarkStore, append_bookmark(bookmark))
    }

    async fn delete_bookmark(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, BookmarkStore, delete_bookmark(user_id, id))
    }

    async fn reindex_bookmarks(
        &self,
        user_id: &str,
        ordered_ids: &[String],
    ) -> Result<usize, StorageError> {
        dispatch!(self, BookmarkStore, reindex_bookmarks(user_id, ordered_ids))
    }
}
