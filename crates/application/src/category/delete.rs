use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use catalog_categories::{CategoryId, CategoryRepository};

use crate::error::ApplicationResult;
use crate::unit_of_work::UnitOfWork;
use crate::use_case::UseCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCategoryInput {
    pub id: CategoryId,
}

impl DeleteCategoryInput {
    pub fn new(id: CategoryId) -> Self {
        Self { id }
    }
}

/// Removes an existing category and commits.
#[derive(Debug)]
pub struct DeleteCategory<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> DeleteCategory<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl<R, U> UseCase<DeleteCategoryInput, ()> for DeleteCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    #[instrument(name = "delete_category", skip_all, fields(category_id = %input.id), err)]
    async fn execute(&self, input: DeleteCategoryInput) -> ApplicationResult<()> {
        let category = self.repository.get_by_id(&input.id).await?;

        self.repository.delete(&category).await?;
        self.unit_of_work.commit().await?;

        info!("category deleted");
        Ok(())
    }
}
