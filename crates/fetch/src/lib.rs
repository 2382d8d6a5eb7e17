//! Outbound fetching for bookmark ingestion: page title and favicon, and a
//! bounded summary from an extraction service.
//!
//! Nothing here returns an error to the ingestion path. Upstream failures are
//! logged and absorbed into degraded metadata.

pub mod client;
pub mod error;
pub mod metadata;
pub mod summary;


pub use client::{truncate_chars, FetchConfig};
pub use error::FetchError;
pub use metadata::{PageFetcher, PageMetadata};
pub use summary::{placeholder_summary, SummaryGenerator};
