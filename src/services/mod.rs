//! Framework-agnostic workflows behind the HTML routes and the JSON API.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod banners;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    /// A unique value is already taken.
    #[error("{0}")]
    Conflict(String),

    /// Submitted data failed validation.
    #[error("{0}")]
    Form(String),

    /// Unknown login or wrong password.
    #[error("{0}")]
    Credentials(String),

    /// Storage or crypto failure; the message is safe to show.
    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(_) => {
                ServiceError::Conflict("already exists".to_string())
            }
            RepositoryError::ValidationError(message) => ServiceError::Form(message),
            _ => ServiceError::Internal("database error".to_string()),
        }
    }
}
