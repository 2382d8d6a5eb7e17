use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved link owned by exactly one user.
///
/// Everything except `position` is fixed at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    /// Server-assigned identifier
    pub id: String,
    /// Owner; every read and write is scoped by it
    pub user_id: String,
    /// URL exactly as the user submitted it (trimmed)
    pub url: String,
    /// Page title, or the URL when none could be extracted
    pub title: String,
    /// Absolute favicon URL when one could be resolved
    pub favicon_url: Option<String>,
    /// Extracted summary or the placeholder text; never empty once stored
    pub summary: String,
    /// Normalized lowercase tags
    pub tags: Vec<String>,
    /// Display rank among the owner's bookmarks
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Whether the bookmark carries every tag in `tags`.
    #[must_use]
    pub fn has_all_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }
}

/// A fully derived bookmark waiting for the store to assign its id and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub user_id: String,
    pub url: String,
    pub title: String,
    pub favicon_url: Option<String>,
    pub summary: String,
    pub tags: Vec<String>,
}

impl NewBookmark {
    /// Materialize the stored row once the store has picked `id` and `position`.
    #[must_use]
    pub fn into_bookmark(self, id: String, position: i32, now: DateTime<Utc>) -> Bookmark {
        Bookmark {
            id,
            user_id: self.user_id,
            url: self.url,
            title: self.title,
            favicon_url: self.favicon_url,
            summary: self.summary,
            tags: self.tags,
            position,
            created_at: now,
            updated_at: now,
        }
    }
}

/// How many of a user's bookmarks carry a tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_bookmark(summary: &str) -> NewBookmark {
        NewBookmark {
            user_id: "u1".to_owned(),
            url: "https://example.com/".to_owned(),
            title: "Example".to_owned(),
            favicon_url: None,
            summary: summary.to_owned(),
            tags: vec!["rust".to_owned()],
        }
    }

    #[test]
    fn into_bookmark_keeps_summary_and_stamps_times() {
        let now = Utc::now();
        let stored = new_bookmark("A short page.").into_bookmark("id-1".to_owned(), 3, now);
        assert_eq!(stored.summary, "A short page.");
        assert_eq!(stored.position, 3);
        assert_eq!(stored.created_at, now);
        assert_eq!(stored.updated_at, now);
    }

    #[test]
    fn serialized_summary_is_always_a_string() {
        let stored = new_bookmark("A short page.").into_bookmark("id-1".to_owned(), 0, Utc::now());
        let mut json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["summary"], "A short page.");

        json["summary"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<Bookmark>(json).is_err());
    }
}
