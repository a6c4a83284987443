//! Turno entity representing a booked appointment slot

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{errors::*, value_objects::TimeOfDay};

use super::Cliente;

/// Appointment slot
///
/// `cliente` is a full copy of the client taken when the appointment was
/// materialized or read back from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turno {
    /// Opaque identifier, empty until assigned
    pub id: String,
    /// Calendar date; `None` means unset
    pub fecha: Option<NaiveDate>,
    pub hora: TimeOfDay,
    pub cliente: Cliente,
}

impl Turno {
    pub fn new(id: impl Into<String>, fecha: NaiveDate, hora: TimeOfDay, cliente: Cliente) -> Self {
        Self {
            id: id.into(),
            fecha: Some(fecha),
            hora,
            cliente,
        }
    }

    /// Checks date, then time, then the embedded client
    pub fn validate(&self) -> DomainResult<()> {
        if self.fecha.is_none() {
            return Err(DomainError::ZeroDate);
        }
        if !self.hora.is_valid() {
            return Err(DomainError::InvalidTime);
        }
        self.cliente
            .validate()
            .map_err(|e| DomainError::InvalidClient(Box::new(e)))
    }

    /// Id of the referenced client
    pub fn cliente_id(&self) -> &str {
        &self.cliente.id
    }
}
