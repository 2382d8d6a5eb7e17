use anyhow::Result;
use linksaver_core::{parse_tag_filter, BookmarkQuery, SortOrder};

use crate::open_service;

pub(crate) async fn run_add(user_id: &str, url: &str, tags: &[String]) -> Result<()> {
    let service = open_service().await?;
    let bookmark = service.ingest(user_id, url, tags).await?;
    println!("{}", serde_json::to_string_pretty(&bookmark)?);
    Ok(())
}

pub(crate) async fn run_list(
    user_id: &str,
    search: Option<String>,
    tags: &[String],
    sort: SortOrder,
) -> Result<()> {
    let service = open_service().await?;
    let query = BookmarkQuery { search, tags: parse_tag_filter(&tags.join(",")), sort };
    let bookmarks = service.list(user_id, &query).await?;
    println!("{}", serde_json::to_string_pretty(&bookmarks)?);
    Ok(())
}
