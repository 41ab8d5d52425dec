//! Recording test doubles for repository and unit-of-work.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use catalog_categories::{Category, CategoryId};
use catalog_core::{Repository, RepositoryError, StorageError};

use crate::unit_of_work::UnitOfWork;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Insert(CategoryId),
    GetById(CategoryId),
    Update(CategoryId),
    Delete(CategoryId),
    Commit,
}

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Default)]
pub struct CallLog(Mutex<Vec<Call>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }
}

#[derive(Debug)]
pub struct FakeCategoryRepository {
    log: Arc<CallLog>,
    stored: Mutex<HashMap<CategoryId, Category>>,
    fail_writes: bool,
}

impl FakeCategoryRepository {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self {
            log,
            stored: Mutex::new(HashMap::new()),
            fail_writes: false,
        }
    }

    pub fn failing(log: Arc<CallLog>) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(log)
        }
    }

    pub fn with(self, category: Category) -> Self {
        self.stored
            .lock()
            .unwrap()
            .insert(category.id_typed(), category);
        self
    }

    pub fn stored(&self, id: CategoryId) -> Option<Category> {
        self.stored.lock().unwrap().get(&id).cloned()
    }

    fn write(&self, call: Call, category: Option<&Category>) -> Result<(), RepositoryError> {
        self.log.push(call.clone());
        if self.fail_writes {
            return Err(RepositoryError::storage("write rejected"));
        }
        let mut stored = self.stored.lock().unwrap();
        match (call, category) {
            (Call::Delete(id), _) => {
                stored.remove(&id);
            }
            (_, Some(category)) => {
                stored.insert(category.id_typed(), category.clone());
            }
            _ => {}
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Category> for FakeCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), RepositoryError> {
        self.write(Call::Insert(category.id_typed()), Some(category))
    }

    async fn get_by_id(&self, id: &CategoryId) -> Result<Category, RepositoryError> {
        self.log.push(Call::GetById(*id));
        self.stored(*id)
            .ok_or_else(|| RepositoryError::not_found::<Category>(id))
    }

    async fn update(&self, category: &Category) -> Result<(), RepositoryError> {
        self.write(Call::Update(category.id_typed()), Some(category))
    }

    async fn delete(&self, category: &Category) -> Result<(), RepositoryError> {
        self.write(Call::Delete(category.id_typed()), None)
    }
}

#[derive(Debug)]
pub struct FakeUnitOfWork {
    log: Arc<CallLog>,
    fail: bool,
}

impl FakeUnitOfWork {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self { log, fail: false }
    }

    pub fn failing(log: Arc<CallLog>) -> Self {
        Self { log, fail: true }
    }
}

#[async_trait]
impl UnitOfWork for FakeUnitOfWork {
    async fn commit(&self) -> Result<(), StorageError> {
        self.log.push(Call::Commit);
        if self.fail {
            return Err(StorageError::new("commit rejected"));
        }
        Ok(())
    }
}

pub fn existing_category() -> Category {
    Category::new("Movies", "Film catalog", true).unwrap()
}
