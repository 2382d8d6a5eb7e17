use std::time::Duration;

use linksaver_core::{
    env_or_default, env_parse_with_default, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PAGE_USER_AGENT,
    DEFAULT_READER_URL, DEFAULT_SUMMARY_TIMEOUT_SECS,
};

use crate::error::FetchError;

/// Outbound HTTP settings for page fetches and the extraction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Bound on the page GET, including reading the body
    pub page_timeout: Duration,
    /// Bound on the extraction service call
    pub summary_timeout: Duration,
    /// Extraction service base; the target URL is appended as one path segment
    pub reader_url: String,
    /// User agent sent to page origins
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            summary_timeout: Duration::from_secs(DEFAULT_SUMMARY_TIMEOUT_SECS),
            reader_url: DEFAULT_READER_URL.to_owned(),
            user_agent: DEFAULT_PAGE_USER_AGENT.to_owned(),
        }
    }
}

impl FetchConfig {
    /// Read `LINKSAVER_*` overrides from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            page_timeout: Duration::from_secs(env_parse_with_default(
                "LINKSAVER_FETCH_TIMEOUT_SECS",
                DEFAULT_FETCH_TIMEOUT_SECS,
            )),
            summary_timeout: Duration::from_secs(env_parse_with_default(
                "LINKSAVER_SUMMARY_TIMEOUT_SECS",
                DEFAULT_SUMMARY_TIMEOUT_SECS,
            )),
            reader_url: env_or_default("LINKSAVER_READER_URL", DEFAULT_READER_URL)
                .trim_end_matches('/')
                .to_owned(),
            user_agent: env_or_default("LINKSAVER_USER_AGENT", DEFAULT_PAGE_USER_AGENT),
        }
    }

    /// Point the extraction service somewhere else (tests, self-hosted readers).
    #[must_use]
    pub fn with_reader_url(mut self, reader_url: impl Into<String>) -> Self {
        self.reader_url = reader_url.into().trim_end_matches('/').to_owned();
        self
    }
}

pub(crate) fn build_client(timeout: Duration, user_agent: &str) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| FetchError::ClientInit(e.to_string()))
}

/// Truncates a string to at most `max_chars` characters.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s.get(..end).unwrap_or(s),
        None => s,
    }
}
