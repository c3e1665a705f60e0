//! Persistence seams used by the use cases.
//!
//! Use cases only see these traits. Implementations decide how categories are
//! stored; the in-memory ones in [`crate::in_memory`] back tests and local runs.
//!
//! ## Staging and commit
//!
//! `CategoryRepository::insert` stages a category. Nothing is durable until the
//! paired `UnitOfWork::commit` succeeds, and `rollback` discards whatever was
//! staged since the last commit.

use std::sync::Arc;

use thiserror::Error;

use codefix_catalog::{Category, CategoryId};

/// Repository / unit-of-work operation error.
///
/// These are **infrastructure errors** as opposed to domain errors
/// (validation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("category {0} not found")]
    NotFound(CategoryId),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Category persistence.
pub trait CategoryRepository: Send + Sync {
    /// Stage a new category for the next commit.
    ///
    /// Fails with `Conflict` when a category with the same id is already
    /// staged or committed.
    fn insert(&self, category: &Category) -> Result<(), RepositoryError>;

    /// Load a committed category.
    fn get(&self, id: CategoryId) -> Result<Category, RepositoryError>;
}

/// Transaction boundary for a use case.
pub trait UnitOfWork: Send + Sync {
    /// Make every staged change durable (all or nothing).
    fn commit(&self) -> Result<(), RepositoryError>;

    /// Discard every staged change.
    fn rollback(&self) -> Result<(), RepositoryError>;
}

impl<R> CategoryRepository for Arc<R>
where
    R: CategoryRepository + ?Sized,
{
    fn insert(&self, category: &Category) -> Result<(), RepositoryError> {
        (**self).insert(category)
    }

    fn get(&self, id: CategoryId) -> Result<Category, RepositoryError> {
        (**self).get(id)
    }
}

impl<U> UnitOfWork for Arc<U>
where
    U: UnitOfWork + ?Sized,
{
    fn commit(&self) -> Result<(), RepositoryError> {
        (**self).commit()
    }

    fn rollback(&self) -> Result<(), RepositoryError> {
        (**self).rollback()
    }
}
