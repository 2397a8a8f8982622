//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Content-store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No post with id {0}")]
    NotFound(Uuid),

    #[error("Store backend failed: {0}")]
    Backend(String),
}
