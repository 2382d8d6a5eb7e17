//! Storage backend trait abstraction
//!
//! Async domain traits for persistence, implemented by every backend and by
//! the `StorageBackend` enum that dispatches between them.

pub mod bookmark;

pub use bookmark::BookmarkStore;
