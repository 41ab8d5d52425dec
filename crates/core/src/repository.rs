//! Persistence boundary for aggregate roots.
//!
//! The domain only depends on these contracts; storage adapters (in-memory,
//! SQL, ...) implement them elsewhere.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::entity::AggregateRoot;

/// A persistence-layer failure (I/O, constraint, poisoned state, ...).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("storage failure: {message}")]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Repository operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No aggregate with the requested id exists.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RepositoryError {
    pub fn not_found<A: AggregateRoot>(id: &A::Id) -> Self {
        Self::NotFound {
            entity: A::NAME,
            id: id.to_string(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(StorageError::new(message))
    }
}

/// Generic repository for one aggregate type.
///
/// Writes are part of the caller's unit of work: an adapter may stage them
/// until the unit of work commits.
#[async_trait]
pub trait Repository<A>: Send + Sync
where
    A: AggregateRoot + Send + Sync,
{
    /// Stage a new aggregate for insertion.
    async fn insert(&self, aggregate: &A) -> Result<(), RepositoryError>;

    /// Load an aggregate, failing with [`RepositoryError::NotFound`] when absent.
    async fn get_by_id(&self, id: &A::Id) -> Result<A, RepositoryError>;

    /// Stage the new state of an existing aggregate.
    async fn update(&self, aggregate: &A) -> Result<(), RepositoryError>;

    /// Stage removal of an existing aggregate.
    async fn delete(&self, aggregate: &A) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<A, R> Repository<A> for Arc<R>
where
    A: AggregateRoot + Send + Sync,
    R: Repository<A> + ?Sized,
{
    async fn insert(&self, aggregate: &A) -> Result<(), RepositoryError> {
        (**self).insert(aggregate).await
    }

    async fn get_by_id(&self, id: &A::Id) -> Result<A, RepositoryError> {
        (**self).get_by_id(id).await
    }

    async fn update(&self, aggregate: &A) -> Result<(), RepositoryError> {
        (**self).update(aggregate).await
    }

    async fn delete(&self, aggregate: &A) -> Result<(), RepositoryError> {
        (**self).delete(aggregate).await
    }
}
