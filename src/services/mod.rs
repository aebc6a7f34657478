use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod client;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Submitted form failed validation; nothing was persisted.
    #[error("{0}")]
    Form(#[from] FormError),

    /// Failure reported by the client data source, passed through unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Invalid value: {0}")]
    TypeConstraint(String),

    #[error("Client not found")]
    NotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
