//! Domain errors for appointment booking
//!
//! Messages are user-facing: the HTTP layer forwards them verbatim in
//! `{"error": "..."}` bodies.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    // === Entity validation ===
    #[error("campos no válidos")]
    InvalidFields,

    #[error("ID requerido para actualizar")]
    IdRequired,

    #[error("fecha no puede ser cero")]
    ZeroDate,

    #[error("hora inválida")]
    InvalidTime,

    #[error("cliente inválido: {0}")]
    InvalidClient(Box<DomainError>),

    // === Value object parsing ===
    #[error("hora inválida: {hour:02}:{minute:02}")]
    TimeOutOfRange { hour: i64, minute: i64 },

    #[error("formato inválido, se esperaba 'HH:MM'")]
    MalformedTime,

    #[error("hora inválida: {0}")]
    InvalidHour(String),

    #[error("minuto inválido: {0}")]
    InvalidMinute(String),

    #[error("preferencia horaria no valida: {0}")]
    InvalidPreference(String),

    // === Request materialization ===
    #[error("error de parse de fecha: {0}")]
    InvalidDate(String),

    #[error("error de parse de hora: {0}")]
    InvalidTimeOfDay(Box<DomainError>),

    /// An appointment references a client that does not exist
    #[error("cliente vacio")]
    ClientNotFound { id: String },

    // === Gateway ===
    #[error("{entity_type} no encontrado: {id}")]
    EntityNotFound { entity_type: String, id: String },

    #[error("error de persistencia: {reason}")]
    Persistence { reason: String },

    #[error("operación cancelada")]
    Cancelled,

    #[error("tiempo de espera agotado")]
    DeadlineExceeded,
}

/// Error classes consumers map to transport-level responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing field, unknown enum value, malformed date or time
    Validation,
    /// Reference to an entity that does not exist
    Reference,
    /// Lookup by id found nothing
    NotFound,
    /// Underlying store failure
    Persistence,
    /// Caller cancelled or the deadline expired
    Cancelled,
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a persistence error from any displayable store failure
    pub fn persistence(reason: impl ToString) -> Self {
        Self::Persistence {
            reason: reason.to_string(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidFields
            | DomainError::IdRequired
            | DomainError::ZeroDate
            | DomainError::InvalidTime
            | DomainError::InvalidClient(_)
            | DomainError::TimeOutOfRange { .. }
            | DomainError::MalformedTime
            | DomainError::InvalidHour(_)
            | DomainError::InvalidMinute(_)
            | DomainError::InvalidPreference(_)
            | DomainError::InvalidDate(_)
            | DomainError::InvalidTimeOfDay(_) => ErrorKind::Validation,
            DomainError::ClientNotFound { .. } => ErrorKind::Reference,
            DomainError::EntityNotFound { .. } => ErrorKind::NotFound,
            DomainError::Persistence { .. } => ErrorKind::Persistence,
            DomainError::Cancelled | DomainError::DeadlineExceeded => ErrorKind::Cancelled,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
