//! Operation logic, independent of HTTP
//!
//! Each operation takes explicit inputs (repositories, ids, payloads) and
//! returns `Result<T, ServiceError>`. The HTTP layer only maps the error
//! kind to a status code.

use crate::db::DbError;
use crate::models::ValidationError;

pub mod attendance;
pub mod groups;
pub mod students;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A referenced record does not exist
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Request is well-formed but not allowed right now
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything the storage layer reports; never inspected, only forwarded
    #[error(transparent)]
    Database(#[from] DbError),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
