//! Bounded-length page summaries.
//!
//! Three tiers, first success wins: the extraction service's plain text, the
//! fetched HTML with markup stripped, then a placeholder naming the host. The
//! result is never empty.

use std::sync::LazyLock;

use linksaver_core::{host_of, READER_USER_AGENT};
use regex::Regex;
use reqwest::header::ACCEPT;
use url::Url;

use crate::client::{build_client, truncate_chars, FetchConfig};
use crate::error::FetchError;

/// Extracted text must be longer than this to be used.
pub const MIN_EXTRACTED_CHARS: usize = 50;
/// Text up to this length is used verbatim; also the hard-truncation length.
pub const SHORT_SUMMARY_CHARS: usize = 300;
/// Sentence accumulation stops before reaching this length.
pub const MAX_SENTENCE_SUMMARY_CHARS: usize = 400;
/// Stripped HTML must be longer than this to be used.
pub const MIN_FALLBACK_TEXT_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

static SENTENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("static regex"));

static SCRIPT_STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("static regex")
});

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Produces summaries via an external reader service, degrading locally.
#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    client: reqwest::Client,
    reader_url: String,
}

impl SummaryGenerator {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config.summary_timeout, READER_USER_AGENT)?,
            reader_url: config.reader_url.clone(),
        })
    }

    /// Summarize `url`. `html` is the page body when the page fetch succeeded.
    ///
    /// When the page itself was unreachable the reader is not consulted and
    /// the placeholder is returned directly.
    pub async fn summarize(&self, url: &str, html: Option<&str>) -> String {
        let Some(html) = html else {
            tracing::debug!(url, "page unreachable, using placeholder summary");
            return placeholder_summary(url);
        };

        match self.extract(url).await {
            Ok(text) => {
                tracing::debug!(url, chars = text.chars().count(), "extraction service returned text");
                return bound_summary(&text);
            },
            Err(e) => {
                tracing::warn!(url, error = %e, "summary extraction failed, falling back to page text");
            },
        }

        html_fallback_summary(html).unwrap_or_else(|| placeholder_summary(url))
    }

    /// Fetch plain text for `url` from the reader, normalized.
    ///
    /// # Errors
    /// Network failure, non-2xx status, or text not longer than
    /// [`MIN_EXTRACTED_CHARS`].
    pub async fn extract(&self, url: &str) -> Result<String, FetchError> {
        let endpoint = reader_endpoint(&self.reader_url, url)?;
        let response = self.client.get(endpoint).header(ACCEPT, "text/plain").send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { code: status.as_u16() });
        }
        let text = normalize_whitespace(&response.text().await?);
        let len = text.chars().count();
        if len <= MIN_EXTRACTED_CHARS {
            return Err(FetchError::TooShort { len });
        }
        Ok(text)
    }
}

/// `{reader_url}/{url}` with `url` percent-encoded as a single path segment.
///
/// # Errors
/// `InvalidUrl` when `reader_url` is not a usable base.
pub fn reader_endpoint(reader_url: &str, target: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl { url: reader_url.to_owned(), reason };
    let mut endpoint = Url::parse(reader_url).map_err(|e| invalid(e.to_string()))?;
    endpoint
        .path_segments_mut()
        .map_err(|()| invalid("cannot be a base URL".to_owned()))?
        .pop_if_empty()
        .push(target);
    Ok(endpoint)
}

/// Collapse every whitespace run (newlines included) to one space and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Bound normalized text to a readable summary.
///
/// Text of at most [`SHORT_SUMMARY_CHARS`] is returned as is. Longer text is
/// cut into sentences at runs of `.`, `!` or `?`; whole sentences are kept,
/// each followed by `". "`, while the running length stays under
/// [`MAX_SENTENCE_SUMMARY_CHARS`]. If not even the first sentence fits, the
/// first [`SHORT_SUMMARY_CHARS`] characters plus [`ELLIPSIS`] are used.
#[must_use]
pub fn bound_summary(text: &str) -> String {
    if text.chars().count() <= SHORT_SUMMARY_CHARS {
        return text.to_owned();
    }

    let mut summary = String::new();
    let mut summary_chars = 0usize;
    for sentence in SENTENCE_END_REGEX.split(text) {
        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            continue;
        }
        if summary_chars + sentence.chars().count() >= MAX_SENTENCE_SUMMARY_CHARS {
            break;
        }
        summary.push_str(trimmed);
        summary.push_str(". ");
        summary_chars += trimmed.chars().count() + 2;
    }

    let summary = summary.trim_end();
    if summary.is_empty() {
        format!("{}{ELLIPSIS}", truncate_chars(text, SHORT_SUMMARY_CHARS))
    } else {
        summary.to_owned()
    }
}

/// Visible text of an HTML document, whitespace-normalized.
#[must_use]
pub fn strip_markup(html: &str) -> String {
    let without_code = SCRIPT_STYLE_REGEX.replace_all(html, " ");
    normalize_whitespace(&TAG_REGEX.replace_all(&without_code, " "))
}

/// Summary from the page's own text, when there is enough of it.
#[must_use]
pub fn html_fallback_summary(html: &str) -> Option<String> {
    let text = strip_markup(html);
    (text.chars().count() > MIN_FALLBACK_TEXT_CHARS)
        .then(|| format!("{}{ELLIPSIS}", truncate_chars(&text, SHORT_SUMMARY_CHARS)))
}

/// Stand-in summary for pages that could not be read yet.
#[must_use]
pub fn placeholder_summary(url: &str) -> String {
    let host = host_of(url).unwrap_or_else(|| url.to_owned());
    format!("Bookmark saved from {host}. AI summary will be generated when the page becomes accessible.")
}
