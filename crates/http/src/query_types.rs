//! Request/query types (Deserialize)

use linksaver_core::{parse_tag_filter, BookmarkQuery, SortOrder};
use serde::Deserialize;

/// `GET /api/bookmarks?q=&tags=&sort=`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    /// Comma-separated; every tag must match
    pub tags: Option<String>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn into_query(self) -> Result<BookmarkQuery, String> {
        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => SortOrder::default(),
            Some(raw) => raw.parse::<SortOrder>()?,
        };
        Ok(BookmarkQuery {
            search: self.q.filter(|q| !q.trim().is_empty()),
            tags: self.tags.as_deref().map(parse_tag_filter).unwrap_or_default(),
            sort,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    /// Optional at the serde level so a missing `url` gets the same message as
    /// an empty one.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One entry of a reorder submission: a bare id or a bookmark-like object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReorderItem {
    Id(String),
    Bookmark { id: String },
}

impl ReorderItem {
    pub fn into_id(self) -> String {
        match self {
            Self::Id(id) | Self::Bookmark { id } => id,
        }
    }
}

/// `PUT /api/bookmarks/reorder` body: the caller's bookmarks in the new order.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub bookmarks: Vec<ReorderItem>,
}

impl ReorderRequest {
    pub fn into_ids(self) -> Vec<String> {
        self.bookmarks.into_iter().map(ReorderItem::into_id).collect()
    }
}
