//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Persistence failures live in [`crate::repository`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity invariant was violated.
    ///
    /// The display form is the bare message, e.g.
    /// `Name should not be less than 3 characters`.
    #[error("{0}")]
    EntityValidation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn entity_validation(msg: impl Into<String>) -> Self {
        Self::EntityValidation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// `true` for [`DomainError::EntityValidation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EntityValidation(_))
    }
}
