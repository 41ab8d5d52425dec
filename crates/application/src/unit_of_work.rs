use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::StorageError;

/// Transaction boundary for one use-case invocation.
///
/// Everything staged through repositories since the last commit becomes
/// durable (and visible) when `commit` succeeds.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn commit(&self) -> Result<(), StorageError>;
}

#[async_trait]
impl<U> UnitOfWork for Arc<U>
where
    U: UnitOfWork + ?Sized,
{
    async fn commit(&self) -> Result<(), StorageError> {
        (**self).commit().await
    }
}
