use async_trait::async_trait;

use crate::error::ApplicationResult;

/// A single application operation: one input, one output.
///
/// Callers invoke handlers directly; there is no mediator in between.
#[async_trait]
pub trait UseCase<I, O>: Send + Sync
where
    I: Send + 'static,
{
    async fn execute(&self, input: I) -> ApplicationResult<O>;
}
