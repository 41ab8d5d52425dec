//! Errors surfaced by use cases.

use thiserror::Error;

use catalog_core::{DomainError, RepositoryError, StorageError};

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Use-case failure.
///
/// Each variant carries the originating error unchanged; use cases never
/// retry or reword them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Entity validation failed (no repository or commit call was made).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The requested aggregate does not exist.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Repository write or commit failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<RepositoryError> for ApplicationError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound { entity, id } => ApplicationError::NotFound { entity, id },
            RepositoryError::Storage(e) => ApplicationError::Storage(e),
        }
    }
}

impl ApplicationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
