use std::collections::BTreeMap;

use crate::{Bookmark, TagCount, ValidationError, MAX_TAGS};

/// Normalize caller-supplied tags: trim, lowercase, drop blanks, de-duplicate
/// keeping the first occurrence.
///
/// # Errors
/// `TooManyTags` when more than [`MAX_TAGS`] distinct tags remain.
pub fn normalize_tags<I, S>(raw: I) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    if tags.len() > MAX_TAGS {
        return Err(ValidationError::TooManyTags { got: tags.len(), max: MAX_TAGS });
    }
    Ok(tags)
}

/// Split a comma-separated tag filter (`"rust, web"`) into normalized tags.
/// No cap applies: filters are not stored.
#[must_use]
pub fn parse_tag_filter(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(|t| t.trim().to_lowercase()) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Distinct tags across `bookmarks` with usage counts, sorted by tag.
#[must_use]
pub fn count_tags(bookmarks: &[Bookmark]) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tag in bookmarks.iter().flat_map(|b| b.tags.iter()) {
        *counts.entry(tag.as_str()).or_default() += 1;
    }
    counts.into_iter().map(|(tag, count)| TagCount { tag: tag.to_owned(), count }).collect()
}
