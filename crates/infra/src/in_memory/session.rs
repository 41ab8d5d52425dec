use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use catalog_application::UnitOfWork;
use catalog_categories::{Category, CategoryId};
use catalog_core::{Repository, RepositoryError, StorageError};

use super::database::{InMemoryDatabase, StagedChange};

/// One transaction over an [`InMemoryDatabase`].
///
/// Acts as both the category repository and the unit of work; clones share
/// the same staged changes. Reads see the session's own staged writes on top
/// of committed state. A failed commit discards the staged changes.
#[derive(Debug, Clone)]
pub struct InMemorySession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    db: Arc<InMemoryDatabase>,
    staged: Mutex<Vec<StagedChange>>,
}

impl InMemorySession {
    pub(crate) fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                db,
                staged: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Number of writes waiting for commit.
    pub fn pending_changes(&self) -> Result<usize, StorageError> {
        Ok(self.staged()?.len())
    }

    /// Drop every staged write.
    pub fn rollback(&self) -> Result<(), StorageError> {
        let mut staged = self.staged()?;
        debug!(discarded = staged.len(), "in-memory rollback");
        staged.clear();
        Ok(())
    }

    fn staged(&self) -> Result<MutexGuard<'_, Vec<StagedChange>>, StorageError> {
        self.inner
            .staged
            .lock()
            .map_err(|_| StorageError::new("lock poisoned"))
    }

    fn current(
        &self,
        staged: &[StagedChange],
        id: &CategoryId,
    ) -> Result<Option<Category>, StorageError> {
        let mut current = self.inner.db.get(id)?;
        for change in staged.iter().filter(|c| c.target() == *id) {
            current = match change {
                StagedChange::Insert(c) | StagedChange::Update(c) => Some(c.clone()),
                StagedChange::Delete(_) => None,
            };
        }
        Ok(current)
    }

    fn stage(&self, change: StagedChange) -> Result<(), RepositoryError> {
        let mut staged = self.staged()?;
        let id = change.target();
        let exists = self.current(&staged, &id)?.is_some();

        match (&change, exists) {
            (StagedChange::Insert(_), true) => {
                return Err(RepositoryError::storage(format!(
                    "Category '{id}' already exists"
                )));
            }
            (StagedChange::Update(_) | StagedChange::Delete(_), false) => {
                return Err(RepositoryError::storage(format!(
                    "Category '{id}' does not exist"
                )));
            }
            _ => {}
        }

        staged.push(change);
        Ok(())
    }
}

#[async_trait]
impl Repository<Category> for InMemorySession {
    async fn insert(&self, category: &Category) -> Result<(), RepositoryError> {
        self.stage(StagedChange::Insert(category.clone()))
    }

    async fn get_by_id(&self, id: &CategoryId) -> Result<Category, RepositoryError> {
        let staged = self.staged()?;
        self.current(&staged, id)?
            .ok_or_else(|| RepositoryError::not_found::<Category>(id))
    }

    async fn update(&self, category: &Category) -> Result<(), RepositoryError> {
        self.stage(StagedChange::Update(category.clone()))
    }

    async fn delete(&self, category: &Category) -> Result<(), RepositoryError> {
        self.stage(StagedChange::Delete(category.id_typed()))
    }
}

#[async_trait]
impl UnitOfWork for InMemorySession {
    async fn commit(&self) -> Result<(), StorageError> {
        let mut staged = self.staged()?;
        let changes = std::mem::take(&mut *staged);
        self.inner.db.apply(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::database::CategoryRecord;

    fn category(name: &str) -> Category {
        Category::with_defaults(name, "").unwrap()
    }

    #[tokio::test]
    async fn writes_are_invisible_until_commit() {
        let db = Arc::new(InMemoryDatabase::new());
        let writer = db.session();
        let reader = db.session();
        let movies = category("Movies");
        let id = movies.id_typed();

        writer.insert(&movies).await.unwrap();

        assert_eq!(writer.get_by_id(&id).await.unwrap(), movies);
        assert!(reader.get_by_id(&id).await.unwrap_err().to_string().contains("not found"));
        assert_eq!(writer.pending_changes().unwrap(), 1);

        writer.commit().await.unwrap();

        assert_eq!(reader.get_by_id(&id).await.unwrap(), movies);
        assert_eq!(writer.pending_changes().unwrap(), 0);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let db = Arc::new(InMemoryDatabase::new());
        let id = CategoryId::generate();

        let err = db.session().get_by_id(&id).await.unwrap_err();

        assert_eq!(err, RepositoryError::not_found::<Category>(&id));
    }

    #[tokio::test]
    async fn staged_delete_hides_category() {
        let db = Arc::new(InMemoryDatabase::new());
        let session = db.session();
        let movies = category("Movies");
        session.insert(&movies).await.unwrap();
        session.commit().await.unwrap();

        session.delete(&movies).await.unwrap();
        assert!(session.get_by_id(&movies.id_typed()).await.is_err());
        assert!(db.get(&movies.id_typed()).unwrap().is_some());

        session.commit().await.unwrap();
        assert!(db.is_empty().unwrap());
    }

    #[tokio::test]
    async fn rejects_duplicate_insert_and_unknown_update() {
        let db = Arc::new(InMemoryDatabase::new());
        let session = db.session();
        let movies = category("Movies");

        session.insert(&movies).await.unwrap();
        let err = session.insert(&movies).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));

        let ghost = category("Ghost");
        assert!(matches!(
            session.update(&ghost).await.unwrap_err(),
            RepositoryError::Storage(_)
        ));
        assert!(matches!(
            session.delete(&ghost).await.unwrap_err(),
            RepositoryError::Storage(_)
        ));
        assert_eq!(session.pending_changes().unwrap(), 1);
    }

    #[tokio::test]
    async fn rollback_discards_staged_writes() {
        let db = Arc::new(InMemoryDatabase::new());
        let session = db.session();
        session.insert(&category("Movies")).await.unwrap();

        session.rollback().unwrap();
        session.commit().await.unwrap();

        assert!(db.is_empty().unwrap());
    }

    #[tokio::test]
    async fn conflicting_commit_fails_and_discards_changes() {
        let db = Arc::new(InMemoryDatabase::new());
        let movies = category("Movies");
        let setup = db.session();
        setup.insert(&movies).await.unwrap();
        setup.commit().await.unwrap();

        let first = db.session();
        let second = db.session();
        first.delete(&movies).await.unwrap();
        second.delete(&movies).await.unwrap();

        first.commit().await.unwrap();
        let err = second.commit().await.unwrap_err();

        assert!(err.message().contains("no longer exists"));
        assert_eq!(second.pending_changes().unwrap(), 0);
    }

    #[tokio::test]
    async fn loading_an_invalid_row_fails_with_storage_error() {
        let db = Arc::new(InMemoryDatabase::new());
        let id = CategoryId::generate();
        db.put_record(CategoryRecord {
            id,
            name: "   ".to_string(),
            description: String::new(),
            is_active: true,
            created_at: chrono::Utc::now(),
        });

        let err = db.session().get_by_id(&id).await.unwrap_err();

        match err {
            RepositoryError::Storage(err) => assert!(err.message().contains("is corrupt")),
            other => panic!("Expected Storage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn clones_share_staged_changes() {
        let db = Arc::new(InMemoryDatabase::new());
        let repository = db.session();
        let unit_of_work = repository.clone();
        let movies = category("Movies");

        repository.insert(&movies).await.unwrap();
        unit_of_work.commit().await.unwrap();

        assert_eq!(db.len().unwrap(), 1);
    }
}
