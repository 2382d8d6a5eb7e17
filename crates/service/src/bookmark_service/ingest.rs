use linksaver_core::{normalize_tags, validate_url, Bookmark, NewBookmark};
use linksaver_storage::BookmarkStore;

use super::BookmarkService;
use crate::ServiceError;

impl BookmarkService {
    /// Turn a raw URL into a stored bookmark.
    ///
    /// Input is validated before any network call. Page and summary fetches
    /// never fail this call; they degrade to the URL as title and a placeholder
    /// summary. The row is written once, fully formed, at the end of the
    /// caller's list.
    pub async fn ingest<S: AsRef<str>>(
        &self,
        user_id: &str,
        url: &str,
        tags: &[S],
    ) -> Result<Bookmark, ServiceError> {
        let url = validate_url(url)?;
        let tags = normalize_tags(tags)?;

        let page = self.fetcher.fetch(&url).await;
        let summary = self.summarizer.summarize(&url, page.html.as_deref()).await;

        let new_bookmark = NewBookmark {
            user_id: user_id.to_owned(),
            url,
            title: page.title,
            favicon_url: page.favicon_url,
            summary,
            tags,
        };
        let stored = self.storage.append_bookmark(&new_bookmark).await?;
        tracing::info!(
            user_id,
            id = %stored.id,
            position = stored.position,
            has_favicon = stored.favicon_url.is_some(),
            "bookmark saved"
        );
        Ok(stored)
    }
}
