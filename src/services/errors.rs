use thiserror::Error;

use crate::repository::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcomes the HTTP layer translates into non-success responses.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed validation.
    #[error("{0}")]
    Form(String),
    /// A record with the same unique value already exists.
    #[error("conflict")]
    Conflict,
    #[error("not found")]
    NotFound,
    /// The request was valid but changed nothing.
    #[error("no changes")]
    NoChanges,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(_) => ServiceError::Conflict,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
