//! Shared constants for linksaver.
//!
//! Centralizes limits and defaults used by more than one crate.

/// Maximum number of distinct tags on one bookmark.
pub const MAX_TAGS: usize = 10;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Page fetch timeout when `LINKSAVER_FETCH_TIMEOUT_SECS` is not set.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Extraction service timeout when `LINKSAVER_SUMMARY_TIMEOUT_SECS` is not set.
pub const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 15;

/// Extraction service used when `LINKSAVER_READER_URL` is not set.
pub const DEFAULT_READER_URL: &str = "https://r.jina.ai";

/// User agent sent to page origins.
pub const DEFAULT_PAGE_USER_AGENT: &str = "Mozilla/5.0 (compatible; LinkSaver/1.0)";

/// User agent sent to the extraction service.
pub const READER_USER_AGENT: &str = "LinkSaver/1.0";
