use thiserror::Error;

use codefix_core::DomainError;

use crate::repository::RepositoryError;

/// Error returned by use cases.
///
/// Validation messages pass through unchanged so callers can show them as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Input was rejected by a domain rule.
    #[error("{0}")]
    Validation(String),

    /// Persisting or committing failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ApplicationError::Validation(msg),
            DomainError::InvalidId(msg) => ApplicationError::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_message_is_preserved() {
        let err: ApplicationError =
            DomainError::validation("Description should not be null!").into();
        assert_eq!(err.to_string(), "Description should not be null!");
    }

    #[test]
    fn invalid_id_maps_to_validation() {
        let err: ApplicationError = DomainError::invalid_id("AggregateId: nil uuid").into();
        assert_eq!(
            err,
            ApplicationError::Validation("AggregateId: nil uuid".to_string())
        );
    }

    #[test]
    fn repository_errors_display_transparently() {
        let err: ApplicationError = RepositoryError::Storage("disk full".to_string()).into();
        assert_eq!(err.to_string(), "storage failure: disk full");
    }
}
