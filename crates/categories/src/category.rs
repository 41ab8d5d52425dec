use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::validation;
use catalog_core::{AggregateId, AggregateRoot, DomainResult, Entity};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Field labels used in validation messages.
pub const NAME_FIELD: &str = "Name";
pub const DESCRIPTION_FIELD: &str = "Description";

/// Category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub AggregateId);

impl CategoryId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    /// Allocate a fresh identifier.
    pub fn generate() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for CategoryId {
    type Err = catalog_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Aggregate root: Category.
///
/// Every constructor and mutator leaves the category valid or returns an
/// `EntityValidation` error; there is no way to observe an invalid category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with a fresh id and the current time.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        let category = Self {
            id: CategoryId::generate(),
            name: trimmed(name.into()),
            description: description.into(),
            is_active,
            created_at: Utc::now(),
        };
        category.validate()?;
        Ok(category)
    }

    /// Create a new, active category.
    pub fn with_defaults(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(name, description, true)
    }

    /// Rebuild a category from persisted state. The same invariants apply.
    pub fn restore(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let category = Self {
            id,
            name: trimmed(name.into()),
            description: description.into(),
            is_active,
            created_at,
        };
        category.validate()?;
        Ok(category)
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        self.is_active = true;
        self.validate()
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.is_active = false;
        self.validate()
    }

    /// Rename the category and, when given, replace its description.
    ///
    /// The name is stored trimmed. On error the category keeps its previous name and description.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> DomainResult<()> {
        let name = trimmed(name.into());
        let description = description.unwrap_or_else(|| self.description.clone());
        validate_fields(&name, &description)?;

        self.name = name;
        self.description = description;
        Ok(())
    }

    fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, &self.description)
    }
}

/// Names are stored without surrounding whitespace.
fn trimmed(name: String) -> String {
    let trimmed = name.trim();
    if trimmed.len() == name.len() {
        name
    } else {
        trimmed.to_owned()
    }
}

/// Checks run in a fixed order; the first failing rule decides the message.
fn validate_fields(name: &str, description: &str) -> DomainResult<()> {
    validation::not_null_or_empty(Some(name), NAME_FIELD)?;
    validation::min_length(name, NAME_MIN_LENGTH, NAME_FIELD)?;
    validation::max_length(name, NAME_MAX_LENGTH, NAME_FIELD)?;

    // A `&str` description is never null; only its length is checked.
    validation::max_length(description, DESCRIPTION_MAX_LENGTH, DESCRIPTION_FIELD)
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    const NAME: &'static str = "Category";
}
