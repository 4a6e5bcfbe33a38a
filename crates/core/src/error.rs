//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// lifecycle state). Persistence concerns live in [`crate::StoreError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Constructor input violated an invariant; nothing was created.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation was called on an entity whose lifecycle forbids it.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
