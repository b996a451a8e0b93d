use diesel::r2d2::PoolError;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures raised by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed row does not exist.
    #[error("record not found")]
    NotFound,
    /// A row referenced by the payload does not exist.
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },
    /// The store rejected the statement; the message is SQLite's own text.
    #[error("{0}")]
    Database(diesel::result::Error),
    /// No connection could be checked out of the pool.
    #[error("{0}")]
    Pool(#[from] PoolError),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}
