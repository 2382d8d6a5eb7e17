//! List filtering and sorting over a user's bookmarks.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Bookmark;

/// Display order for a bookmark list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// The user's drag-and-drop order
    #[default]
    Position,
    /// Most recently created first
    Newest,
    /// Oldest first
    Oldest,
    /// Title, case-insensitive
    Title,
    /// URL, case-insensitive
    Url,
}

impl SortOrder {
    pub const ALL_VARIANTS_STR: &'static str = "position|newest|oldest|title|url";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
            Self::Url => "url",
        }
    }

    fn compare(self, a: &Bookmark, b: &Bookmark) -> Ordering {
        match self {
            Self::Position => a.position.cmp(&b.position),
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::Url => a.url.to_lowercase().cmp(&b.url.to_lowercase()),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "position" => Ok(Self::Position),
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "title" => Ok(Self::Title),
            "url" => Ok(Self::Url),
            other => Err(format!("unknown sort order '{other}', expected {}", Self::ALL_VARIANTS_STR)),
        }
    }
}

/// Search, tag filter and sort applied to a list of bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkQuery {
    /// Case-insensitive substring matched against title, url and summary
    pub search: Option<String>,
    /// Every tag here must be present on a bookmark
    pub tags: Vec<String>,
    pub sort: SortOrder,
}

impl BookmarkQuery {
    /// Whether the query leaves the list untouched.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.search.is_none() && self.tags.is_empty() && self.sort == SortOrder::Position
    }

    #[must_use]
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        if !bookmark.has_all_tags(&self.tags) {
            return false;
        }
        let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = needle.to_lowercase();
        bookmark.title.to_lowercase().contains(&needle)
            || bookmark.url.to_lowercase().contains(&needle)
            || bookmark.summary.to_lowercase().contains(&needle)
    }

    /// Filter and sort `bookmarks`. Ties keep position order.
    #[must_use]
    pub fn apply(&self, mut bookmarks: Vec<Bookmark>) -> Vec<Bookmark> {
        bookmarks.retain(|b| self.matches(b));
        let sort = self.sort;
        bookmarks.sort_by(|a, b| sort.compare(a, b).then_with(|| a.position.cmp(&b.position)));
        bookmarks
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn bookmark(id: &str, position: i32, title: &str, tags: &[&str], age_days: i64) -> Bookmark {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() - Duration::days(age_days);
        Bookmark {
            id: id.to_owned(),
            user_id: "user-1".to_owned(),
            url: format!("https://{id}.example.com/"),
            title: title.to_owned(),
            favicon_url: None,
            summary: format!("Summary of {title}"),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            position,
            created_at: created,
            updated_at: created,
        }
    }

    fn sample() -> Vec<Bookmark> {
        vec![
            bookmark("a", 0, "Tokio internals", &["rust", "async"], 3),
            bookmark("b", 1, "axum guide", &["rust", "web"], 1),
            bookmark("c", 2, "CSS tricks", &["web"], 2),
        ]
    }

    fn ids(list: &[Bookmark]) -> Vec<&str> {
        list.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn default_query_keeps_position_order() {
        let query = BookmarkQuery::default();
        assert!(query.is_identity());
        let mut shuffled = sample();
        shuffled.reverse();
        assert_eq!(ids(&query.apply(shuffled)), vec!["a", "b", "c"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let by_title = BookmarkQuery { search: Some("TOKIO".to_owned()), ..Default::default() };
        assert_eq!(ids(&by_title.apply(sample())), vec!["a"]);

        let by_url = BookmarkQuery { search: Some("c.example".to_owned()), ..Default::default() };
        assert_eq!(ids(&by_url.apply(sample())), vec!["c"]);

        let by_summary =
            BookmarkQuery { search: Some("summary of axum".to_owned()), ..Default::default() };
        assert_eq!(ids(&by_summary.apply(sample())), vec!["b"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let query = BookmarkQuery { search: Some("  ".to_owned()), ..Default::default() };
        assert_eq!(query.apply(sample()).len(), 3);
    }

    #[test]
    fn tag_filter_requires_every_tag() {
        let query =
            BookmarkQuery { tags: vec!["rust".to_owned(), "web".to_owned()], ..Default::default() };
        assert_eq!(ids(&query.apply(sample())), vec!["b"]);

        let query = BookmarkQuery { tags: vec!["web".to_owned()], ..Default::default() };
        assert_eq!(ids(&query.apply(sample())), vec!["b", "c"]);
    }

    #[test]
    fn sorts() {
        let newest = BookmarkQuery { sort: SortOrder::Newest, ..Default::default() };
        assert_eq!(ids(&newest.apply(sample())), vec!["b", "c", "a"]);

        let oldest = BookmarkQuery { sort: SortOrder::Oldest, ..Default::default() };
        assert_eq!(ids(&oldest.apply(sample())), vec!["a", "c", "b"]);

        let title = BookmarkQuery { sort: SortOrder::Title, ..Default::default() };
        assert_eq!(ids(&title.apply(sample())), vec!["b", "c", "a"]);
    }

    #[test]
    fn parses_sort_order() {
        assert_eq!("Newest".parse::<SortOrder>(), Ok(SortOrder::Newest));
        assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::Position));
        assert!("random".parse::<SortOrder>().is_err());
    }
}
