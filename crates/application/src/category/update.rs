use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use catalog_categories::{CategoryId, CategoryRepository, NAME_FIELD};
use catalog_core::validation;

use crate::category::common::CategoryModelOutput;
use crate::error::ApplicationResult;
use crate::unit_of_work::UnitOfWork;
use crate::use_case::UseCase;

/// Input for [`UpdateCategory`].
///
/// A missing name is rejected like an empty one. `description: None` keeps
/// the current description; `is_active: None` keeps the current activation
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryInput {
    pub id: CategoryId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryInput {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description,
            is_active,
        }
    }
}

/// Loads a category, applies the changes, stages the new state and commits.
#[derive(Debug)]
pub struct UpdateCategory<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> UpdateCategory<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl<R, U> UseCase<UpdateCategoryInput, CategoryModelOutput> for UpdateCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    #[instrument(name = "update_category", skip_all, fields(category_id = %input.id), err)]
    async fn execute(&self, input: UpdateCategoryInput) -> ApplicationResult<CategoryModelOutput> {
        let mut category = self.repository.get_by_id(&input.id).await?;

        validation::not_null_or_empty(input.name.as_deref(), NAME_FIELD)?;
        category.update(input.name.unwrap_or_default(), input.description)?;
        match input.is_active {
            Some(true) => category.activate()?,
            Some(false) => category.deactivate()?,
            None => {}
        }

        self.repository.update(&category).await?;
        self.unit_of_work.commit().await?;

        info!(is_active = category.is_active(), "category updated");
        Ok(CategoryModelOutput::from_category(&category))
    }
}
