//! Storage layer for linksaver
//!
//! `BookmarkStore` is the only persistence seam. PostgreSQL is the primary
//! backend; the memory backend serves local runs without a database and tests.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::BookmarkStore;
