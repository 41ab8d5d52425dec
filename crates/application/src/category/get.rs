use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use catalog_categories::{CategoryId, CategoryRepository};

use crate::category::common::CategoryModelOutput;
use crate::error::ApplicationResult;
use crate::use_case::UseCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategoryInput {
    pub id: CategoryId,
}

impl GetCategoryInput {
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }
}

/// Read-only lookup; never touches the unit of work.
#[derive(Debug)]
pub struct GetCategory<R> {
    repository: R,
}

impl<R> GetCategory<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UseCase<GetCategoryInput, CategoryModelOutput> for GetCategory<R>
where
    R: CategoryRepository,
{
    #[instrument(name = "get_category", skip_all, fields(category_id = %input.id), err)]
    async fn execute(&self, input: GetCategoryInput) -> ApplicationResult<CategoryModelOutput> {
        let category = self.repository.get_by_id(&input.id).await?;
        debug!("category loaded");
        Ok(CategoryModelOutput::from_category(&category))
    }
}
