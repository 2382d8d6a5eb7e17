//! Schema setup for the PostgreSQL backend.
//!
//! Connecting runs the idempotent migrations, so this is safe to repeat.

use linksaver_core::env_non_empty;
use linksaver_storage::StorageBackend;

pub(crate) async fn run() -> anyhow::Result<()> {
    let pg_url = env_non_empty("DATABASE_URL")
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to run migrations"))?;
    let storage = StorageBackend::new_postgres(&pg_url).await?;
    tracing::info!(storage = storage.kind(), "migrations applied");
    println!("Schema is up to date");
    Ok(())
}
