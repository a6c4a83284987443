//! Application layer error types
//!
//! These errors classify domain failures for external consumers (API, CLI).
//! Each variant displays the wrapped domain message unchanged, so what the
//! caller sees is exactly what the domain reported.

use thiserror::Error;
use turnos_domain::errors::{DomainError, ErrorKind};

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    // === Validation Errors ===

    /// Input or entity validation failed
    #[error(transparent)]
    ValidationFailed(DomainError),

    // === Reference Errors ===

    /// An appointment points at a client that does not exist
    #[error(transparent)]
    ReferenceNotFound(DomainError),

    // === Not Found Errors ===

    /// Lookup by id found nothing
    #[error(transparent)]
    NotFound(DomainError),

    // === Infrastructure Errors ===

    /// Repository operation failed
    #[error(transparent)]
    RepositoryError(DomainError),

    /// The caller cancelled or the deadline expired
    #[error(transparent)]
    Cancelled(DomainError),
}

impl ApplicationError {
    /// The wrapped domain error
    pub fn domain_error(&self) -> &DomainError {
        match self {
            ApplicationError::ValidationFailed(e)
            | ApplicationError::ReferenceNotFound(e)
            | ApplicationError::NotFound(e)
            | ApplicationError::RepositoryError(e)
            | ApplicationError::Cancelled(e) => e,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err.kind() {
            ErrorKind::Validation => ApplicationError::ValidationFailed(err),
            ErrorKind::Reference => ApplicationError::ReferenceNotFound(err),
            ErrorKind::NotFound => ApplicationError::NotFound(err),
            ErrorKind::Persistence => ApplicationError::RepositoryError(err),
            ErrorKind::Cancelled => ApplicationError::Cancelled(err),
        }
    }
}
