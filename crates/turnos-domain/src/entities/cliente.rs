//! Cliente entity representing a customer of the business

use serde::{Deserialize, Serialize};

use crate::{errors::*, value_objects::PreferenciaHoraria};

/// Customer record
///
/// Mutated only by full replacement; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    /// Opaque identifier, empty until assigned
    pub id: String,
    pub nombre: String,
    pub telefono: String,
    pub preferencia_horaria: PreferenciaHoraria,
}

impl Cliente {
    pub fn new(
        id: impl Into<String>,
        nombre: impl Into<String>,
        telefono: impl Into<String>,
        preferencia_horaria: PreferenciaHoraria,
    ) -> Self {
        Self {
            id: id.into(),
            nombre: nombre.into(),
            telefono: telefono.into(),
            preferencia_horaria,
        }
    }

    /// Single conjunctive gate: any failing field yields the same error
    pub fn validate(&self) -> DomainResult<()> {
        if self.nombre.is_empty()
            || self.telefono.is_empty()
            || !self.preferencia_horaria.is_recognized()
        {
            return Err(DomainError::InvalidFields);
        }
        Ok(())
    }
}
