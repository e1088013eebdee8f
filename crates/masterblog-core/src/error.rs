//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Post not found: id {0}")]
    NotFound(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage access failed: {0}")]
    Storage(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
