use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_categories::{Category, CategoryId};

/// Output projection shared by the category use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryModelOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CategoryModelOutput {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id_typed(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<&Category> for CategoryModelOutput {
    fn from(category: &Category) -> Self {
        Self::from_category(category)
    }
}
