//! Page title and favicon extraction.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::client::{build_client, FetchConfig};
use crate::error::FetchError;

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("static regex"));

static ICON_REL_FIRST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]*rel=["'](?:shortcut )?icon["'][^>]*href=["']([^"']+)["']"#)
        .expect("static regex")
});

static ICON_HREF_FIRST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]*href=["']([^"']+)["'][^>]*rel=["'](?:shortcut )?icon["']"#)
        .expect("static regex")
});

/// What a page fetch produced. Never an error: an unreachable page yields
/// `title == url`, no favicon and no html.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub favicon_url: Option<String>,
    /// Raw body of a successful fetch, kept for the summary fallback
    pub html: Option<String>,
}

impl PageMetadata {
    #[must_use]
    pub fn unreachable(url: &str) -> Self {
        Self { title: url.to_owned(), favicon_url: None, html: None }
    }

    /// Derive title and favicon from a fetched body.
    #[must_use]
    pub fn from_html(url: &str, html: String) -> Self {
        let title = extract_title(&html).unwrap_or_else(|| url.to_owned());
        let favicon_url = resolve_favicon(url, &html);
        Self { title, favicon_url, html: Some(html) }
    }
}

/// Fetches a page once, with a bounded timeout and no retries.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self { client: build_client(config.page_timeout, &config.user_agent)? })
    }

    pub async fn fetch(&self, url: &str) -> PageMetadata {
        match self.fetch_html(url).await {
            Ok(html) => PageMetadata::from_html(url, html),
            Err(e) => {
                tracing::warn!(url, error = %e, timeout = e.is_timeout(), "page fetch failed, falling back to URL as title");
                PageMetadata::unreachable(url)
            },
        }
    }

    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { code: status.as_u16() });
        }
        Ok(response.text().await?)
    }
}

/// First `<title>` contents, trimmed. Blank titles count as missing.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_REGEX
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_owned())
        .filter(|t| !t.is_empty())
}

/// Raw `href` of the first `<link rel="icon">` or `<link rel="shortcut icon">`.
#[must_use]
pub fn extract_icon_href(html: &str) -> Option<String> {
    ICON_REL_FIRST_REGEX
        .captures(html)
        .or_else(|| ICON_HREF_FIRST_REGEX.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Absolute favicon URL for a page.
///
/// An explicit icon link wins, resolved against the page URL when relative;
/// otherwise `/favicon.ico` on the page's origin. `None` when resolution fails.
#[must_use]
pub fn resolve_favicon(page_url: &str, html: &str) -> Option<String> {
    match extract_icon_href(html) {
        Some(href) if href.starts_with("http") => Some(href),
        Some(href) => join(page_url, &href),
        None => join(page_url, "/favicon.ico"),
    }
}

fn join(base: &str, relative: &str) -> Option<String> {
    let resolved = Url::parse(base).and_then(|b| b.join(relative));
    match resolved {
        Ok(u) => Some(u.to_string()),
        Err(e) => {
            tracing::debug!(base, relative, error = %e, "favicon URL resolution failed");
            None
        },
    }
}
