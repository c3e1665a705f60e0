use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use codefix_catalog::{Category, CategoryId};
use codefix_core::Entity;

use crate::repository::{CategoryRepository, RepositoryError, UnitOfWork};

#[derive(Debug, Default)]
struct CatalogState {
    committed: HashMap<CategoryId, Category>,
    staged: Vec<Category>,
    commits: u64,
}

/// In-memory category storage shared by a repository and its unit of work.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            catalog: self.clone(),
        }
    }

    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            catalog: self.clone(),
        }
    }

    /// Number of committed categories.
    pub fn len(&self) -> usize {
        self.read(|s| s.committed.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of categories staged but not yet committed.
    pub fn staged_len(&self) -> usize {
        self.read(|s| s.staged.len()).unwrap_or(0)
    }

    /// Number of successful commits so far.
    pub fn commits(&self) -> u64 {
        self.read(|s| s.commits).unwrap_or(0)
    }

    fn read<T>(&self, f: impl FnOnce(&CatalogState) -> T) -> Result<T, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;
        Ok(f(&state))
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut CatalogState) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))?;
        f(&mut state)
    }
}

/// In-memory [`CategoryRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    catalog: InMemoryCatalog,
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn insert(&self, category: &Category) -> Result<(), RepositoryError> {
        let id = *category.id();
        self.catalog.write(|state| {
            let duplicate = state.committed.contains_key(&id)
                || state.staged.iter().any(|c| c.same_identity_as(category));
            if duplicate {
                return Err(RepositoryError::Conflict(format!(
                    "category {id} already exists"
                )));
            }
            state.staged.push(category.clone());
            Ok(())
        })
    }

    fn get(&self, id: CategoryId) -> Result<Category, RepositoryError> {
        self.catalog
            .read(|state| state.committed.get(&id).cloned())?
            .ok_or(RepositoryError::NotFound(id))
    }
}

/// In-memory [`UnitOfWork`].
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    catalog: InMemoryCatalog,
}

impl UnitOfWork for InMemoryUnitOfWork {
    fn commit(&self) -> Result<(), RepositoryError> {
        self.catalog.write(|state| {
            let staged = std::mem::take(&mut state.staged);
            state
                .committed
                .extend(staged.into_iter().map(|c| (*c.id(), c)));
            state.commits += 1;
            Ok(())
        })
    }

    fn rollback(&self) -> Result<(), RepositoryError> {
        self.catalog.write(|state| {
            state.staged.clear();
            Ok(())
        })
    }
}
