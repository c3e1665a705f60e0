//! Application layer: use cases orchestrating the catalog domain.
//!
//! Use cases depend on the [`repository`] traits only; storage backends plug
//! in behind them. The in-memory adapters are intended for tests/dev.

pub mod create_category;
pub mod error;
pub mod in_memory;
pub mod repository;

pub use create_category::{CategoryModelOutput, CreateCategory, CreateCategoryInput};
pub use error::ApplicationError;
pub use in_memory::{InMemoryCatalog, InMemoryCategoryRepository, InMemoryUnitOfWork};
pub use repository::{CategoryRepository, RepositoryError, UnitOfWork};
