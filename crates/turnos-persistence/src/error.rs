//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use thiserror::Error;
use turnos_domain::errors::DomainError;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Entity not found
    #[error("{entity_type} no encontrado: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A write referenced a row that does not exist, or a delete would orphan one
    #[error("violación de clave foránea: {0}")]
    ForeignKey(String),

    /// An appointment write named a client that is not stored
    #[error("cliente {0} no existe")]
    UnknownCliente(String),

    /// A stored column could not be decoded into a domain value
    #[error("valor almacenado inválido en {column}: {value}")]
    Corrupt { column: &'static str, value: String },

    /// Database error
    #[error("error de base de datos: {0}")]
    Database(String),

    /// Schema migration failed
    #[error("migración v{version} fallida: {reason}")]
    MigrationFailed { version: i64, reason: String },

    /// Blocking task panicked or was aborted
    #[error("tarea de base de datos interrumpida: {0}")]
    Task(String),
}

impl PersistenceError {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a corrupt-column error
    pub fn corrupt(column: &'static str, value: impl Into<String>) -> Self {
        Self::Corrupt {
            column,
            value: value.into(),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                PersistenceError::ForeignKey(err.to_string())
            }
            _ => PersistenceError::Database(err.to_string()),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { entity_type, id } => {
                DomainError::not_found(entity_type, id)
            }
            PersistenceError::UnknownCliente(id) => DomainError::ClientNotFound { id },
            other => DomainError::persistence(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnos_domain::errors::ErrorKind;

    #[test]
    fn test_not_found_error() {
        let err = PersistenceError::not_found("cliente", "c-123");
        assert_eq!(err.to_string(), "cliente no encontrado: c-123");
    }

    #[test]
    fn test_error_conversion() {
        let domain_err: DomainError = PersistenceError::not_found("cliente", "123").into();
        assert!(matches!(domain_err, DomainError::EntityNotFound { .. }));

        let domain_err: DomainError = PersistenceError::corrupt("hora", "99:99").into();
        assert_eq!(domain_err.kind(), ErrorKind::Persistence);
        assert!(domain_err.to_string().contains("99:99"));
    }

    #[test]
    fn test_unknown_cliente_is_reference_error() {
        let domain_err: DomainError = PersistenceError::UnknownCliente("c-1".into()).into();
        assert_eq!(domain_err, DomainError::ClientNotFound { id: "c-1".into() });
        assert_eq!(domain_err.kind(), ErrorKind::Reference);

        let domain_err: DomainError = PersistenceError::ForeignKey("c-1".into()).into();
        assert_eq!(domain_err.kind(), ErrorKind::Persistence);
    }
}
