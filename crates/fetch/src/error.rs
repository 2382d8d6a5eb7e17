//! Typed error enum for the fetch crate.
//!
//! These never reach an API caller: ingestion turns every variant into
//! degraded metadata. They exist so each stage can log what went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}")]
    HttpStatus { code: u16 },
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("extracted text too short: {len} chars")]
    TooShort { len: usize },
}

impl FetchError {
    /// Whether the upstream was slow or unreachable rather than answering badly.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpRequest(e) if e.is_timeout())
    }
}
