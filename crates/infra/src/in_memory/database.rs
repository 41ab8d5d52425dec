use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use catalog_categories::{Category, CategoryId};
use catalog_core::StorageError;

use super::session::InMemorySession;

/// A write recorded by a session, applied on commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StagedChange {
    Insert(Category),
    Update(Category),
    Delete(CategoryId),
}

impl StagedChange {
    pub(crate) fn target(&self) -> CategoryId {
        match self {
            StagedChange::Insert(c) | StagedChange::Update(c) => c.id_typed(),
            StagedChange::Delete(id) => *id,
        }
    }
}

/// Persisted form of a category: plain columns, no invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryRecord {
    pub(crate) id: CategoryId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) is_active: bool,
    pub(crate) created_at: DateTime<Utc>,
}

impl CategoryRecord {
    pub(crate) fn from_category(category: &Category) -> Self {
        Self {
            id: category.id_typed(),
            name: category.name().to_owned(),
            description: category.description().to_owned(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }

    /// Rebuild the aggregate; a row that breaks an invariant is a storage fault.
    pub(crate) fn into_category(self) -> Result<Category, StorageError> {
        let id = self.id;
        Category::restore(
            self.id,
            self.name,
            self.description,
            self.is_active,
            self.created_at,
        )
        .map_err(|err| StorageError::new(format!("Category '{id}' is corrupt: {err}")))
    }
}

type Table = HashMap<CategoryId, CategoryRecord>;

/// Committed category state shared by all sessions.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    categories: RwLock<Table>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new transaction over this database.
    pub fn session(self: &Arc<Self>) -> InMemorySession {
        InMemorySession::new(Arc::clone(self))
    }

    /// Committed state of one category.
    pub fn get(&self, id: &CategoryId) -> Result<Option<Category>, StorageError> {
        let record = self.read()?.get(id).cloned();
        record.map(CategoryRecord::into_category).transpose()
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, StorageError> {
        self.categories
            .read()
            .map_err(|_| StorageError::new("lock poisoned"))
    }

    /// Apply a batch of changes atomically: either every change lands or none does.
    pub(crate) fn apply(&self, changes: Vec<StagedChange>) -> Result<(), StorageError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|_| StorageError::new("lock poisoned"))?;

        let mut next = categories.clone();
        let count = changes.len();
        for change in changes {
            apply_change(&mut next, change)?;
        }

        *categories = next;
        debug!(changes = count, total = categories.len(), "in-memory commit applied");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn put_record(&self, record: CategoryRecord) {
        self.categories
            .write()
            .unwrap()
            .insert(record.id, record);
    }
}

fn apply_change(categories: &mut Table, change: StagedChange) -> Result<(), StorageError> {
    match change {
        StagedChange::Insert(category) => {
            let id = category.id_typed();
            if categories.contains_key(&id) {
                return Err(StorageError::new(format!("Category '{id}' already exists")));
            }
            categories.insert(id, CategoryRecord::from_category(&category));
        }
        StagedChange::Update(category) => {
            let id = category.id_typed();
            if !categories.contains_key(&id) {
                return Err(StorageError::new(format!("Category '{id}' no longer exists")));
            }
            categories.insert(id, CategoryRecord::from_category(&category));
        }
        StagedChange::Delete(id) => {
            if categories.remove(&id).is_none() {
                return Err(StorageError::new(format!("Category '{id}' no longer exists")));
            }
        }
    }
    Ok(())
}
