//! CreateCategory use case.
//!
//! ```text
//! CreateCategoryInput
//!   ↓
//! 1. Build the Category (all domain rules, fail-fast)
//!   ↓
//! 2. Stage it in the repository
//!   ↓
//! 3. Commit the unit of work
//!   ↓
//! CategoryModelOutput
//! ```
//!
//! A validation failure stops at step 1: nothing is staged or committed. A
//! failed commit rolls back whatever step 2 staged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use codefix_catalog::{Category, CategoryId};

use crate::error::ApplicationError;
use crate::repository::{CategoryRepository, UnitOfWork};

fn default_is_active() -> bool {
    true
}

/// Input for [`CreateCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            is_active,
        }
    }
}

/// Read model returned to callers after a category use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryModelOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryModelOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id_typed(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

/// Creates a category and commits it.
#[derive(Debug, Clone)]
pub struct CreateCategory<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> CreateCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    pub fn handle(
        &self,
        input: CreateCategoryInput,
    ) -> Result<CategoryModelOutput, ApplicationError> {
        let category = Category::with_is_active(
            input.name.as_str(),
            input.description.as_deref(),
            input.is_active,
        )
        .inspect_err(|err| {
            tracing::debug!(error = %err, "create_category rejected");
        })?;

        self.repository.insert(&category)?;

        if let Err(err) = self.unit_of_work.commit() {
            tracing::warn!(
                category_id = %category.id_typed(),
                error = %err,
                "create_category commit failed"
            );
            if let Err(rollback_err) = self.unit_of_work.rollback() {
                tracing::error!(
                    category_id = %category.id_typed(),
                    error = %rollback_err,
                    "create_category rollback failed"
                );
            }
            return Err(err.into());
        }

        tracing::info!(
            category_id = %category.id_typed(),
            is_active = category.is_active(),
            "category created"
        );

        Ok(CategoryModelOutput::from(&category))
    }
}
