//! Typed error enum for the service layer.
//!
//! Callers match on the failure mode to pick a response: bad input, a missing
//! row, or a storage failure. Upstream fetch failures never reach this type.

use linksaver_core::ValidationError;
use linksaver_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, corrupted row).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (empty URL, bad order, too many tags).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The caller owns no bookmark with this id.
    #[error("not found: {0}")]
    NotFound(String),

    /// Outbound HTTP clients could not be built at startup.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Storage(StorageError::NotFound { .. }))
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
