//! Errors raised by bookmark stores.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A query that must return a row returned none.
    #[error("bookmark row not found: {id}")]
    NotFound { id: String },

    /// Insert hit a unique constraint, e.g. a reused bookmark id.
    #[error("bookmark conflicts with an existing row: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A stored column no longer decodes into the bookmark model.
    #[error("corrupt {column} column")]
    CorruptRow {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("migration failed: {0}")]
    Migration(String),
}

/// `RowNotFound` and SQLSTATE 23505 get their own variants; the rest stay opaque.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { id: String::new() },
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                Self::Conflict(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(source: serde_json::Error) -> Self {
        Self::CorruptRow { column: "tags", source }
    }
}
