use thiserror::Error;

use crate::forms::FormError;
use crate::repository::RepositoryError;

pub mod customers;
pub mod orders;
pub mod products;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcomes of a service call other than success.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload was incomplete or malformed.
    #[error("invalid data format: {0}")]
    Form(String),
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,
    /// The payload points at a record that does not exist.
    #[error("{0}")]
    InvalidReference(String),
    /// The store rejected the operation; the write was rolled back.
    #[error("{0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound,
            err @ RepositoryError::MissingReference { .. } => {
                Self::InvalidReference(err.to_string())
            }
            other => Self::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(value: FormError) -> Self {
        Self::Form(value.to_string())
    }
}
