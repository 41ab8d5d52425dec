use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use catalog_categories::{Category, CategoryRepository, NAME_FIELD};
use catalog_core::validation;

use crate::category::common::CategoryModelOutput;
use crate::error::ApplicationResult;
use crate::unit_of_work::UnitOfWork;
use crate::use_case::UseCase;

/// Input for [`CreateCategory`].
///
/// A missing name is rejected like an empty one. A missing description
/// becomes `""`; a missing `isActive` becomes `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description,
            is_active,
        }
    }
}

/// Creates a category, stages it and commits.
#[derive(Debug)]
pub struct CreateCategory<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> CreateCategory<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl<R, U> UseCase<CreateCategoryInput, CategoryModelOutput> for CreateCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    #[instrument(name = "create_category", skip_all, fields(name = ?input.name), err)]
    async fn execute(&self, input: CreateCategoryInput) -> ApplicationResult<CategoryModelOutput> {
        validation::not_null_or_empty(input.name.as_deref(), NAME_FIELD)?;
        let category = Category::new(
            input.name.unwrap_or_default(),
            input.description.unwrap_or_default(),
            input.is_active,
        )?;

        self.repository.insert(&category).await?;
        self.unit_of_work.commit().await?;

        info!(category_id = %category.id_typed(), "category created");
        Ok(CategoryModelOutput::from_category(&category))
    }
}
