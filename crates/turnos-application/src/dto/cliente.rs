//! Client-related DTOs

use serde::{Deserialize, Serialize};

use turnos_domain::errors::DomainResult;
use turnos_domain::{Cliente, PreferenciaHoraria};

/// Client create/update payload
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    /// Optional on create; a fresh id is generated when empty
    #[serde(default)]
    pub id: String,
    pub nombre: String,
    pub telefono: String,
    pub preferencia_horaria: String,
}

impl ClienteRequest {
    /// Convert to a domain entity, strictly parsing the preference
    pub fn to_domain(&self) -> DomainResult<Cliente> {
        let preferencia = PreferenciaHoraria::parse(&self.preferencia_horaria)?;
        Ok(Cliente::new(
            self.id.clone(),
            self.nombre.clone(),
            self.telefono.clone(),
            preferencia,
        ))
    }
}

/// Client response body
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    pub id: String,
    pub nombre: String,
    pub telefono: String,
    pub preferencia_horaria: String,
}

impl ClienteResponse {
    /// Create from domain entity
    pub fn from_domain(cliente: &Cliente) -> Self {
        Self {
            id: cliente.id.clone(),
            nombre: cliente.nombre.clone(),
            telefono: cliente.telefono.clone(),
            preferencia_horaria: cliente.preferencia_horaria.to_string(),
        }
    }
}
