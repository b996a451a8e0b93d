use thiserror::Error;
use validator::ValidationErrors;

pub mod customers;
pub mod orders;
pub mod products;

/// Result type returned by the form helpers.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while turning a request payload into a domain value.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The order date could not be parsed.
    #[error("invalid order date `{0}`")]
    InvalidOrderDate(String),
}
