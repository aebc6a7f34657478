use std::sync::PoisonError;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The data source rejected or failed the operation.
    #[error("{0}")]
    OperationFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Replaces an empty [`RepositoryError::OperationFailed`] message with
    /// `fallback`. Every other error is returned unchanged.
    pub fn or_default_message(self, fallback: &str) -> Self {
        match self {
            RepositoryError::OperationFailed(message) if message.trim().is_empty() => {
                RepositoryError::OperationFailed(fallback.to_string())
            }
            other => other,
        }
    }
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(err: PoisonError<T>) -> Self {
        RepositoryError::ConnectionError(format!("client store lock poisoned: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_gets_fallback() {
        let err = RepositoryError::OperationFailed(String::new());
        assert_eq!(
            err.or_default_message("Failed to fetch clients").to_string(),
            "Failed to fetch clients"
        );
    }

    #[test]
    fn source_message_is_kept() {
        let err = RepositoryError::OperationFailed("quota exceeded".to_string());
        assert_eq!(
            err.or_default_message("Failed to add client").to_string(),
            "quota exceeded"
        );
        let err = RepositoryError::ConnectionError(String::new());
        assert_eq!(
            err.or_default_message("Failed to add client"),
            RepositoryError::ConnectionError(String::new())
        );
    }
}
