//! Appointment-related DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use turnos_domain::errors::{DomainError, DomainResult};
use turnos_domain::Turno;

use super::ClienteResponse;

/// Wire format of appointment dates
pub const FECHA_FORMAT: &str = "%Y/%m/%d";

/// Parse a `YYYY/MM/DD` wire date
///
/// Month and day must be zero padded; `2025/8/5` is rejected.
pub fn parse_fecha(s: &str) -> DomainResult<NaiveDate> {
    let bytes = s.as_bytes();
    let fixed_width = bytes.len() == 10 && bytes[4] == b'/' && bytes[7] == b'/';
    if !fixed_width {
        return Err(DomainError::InvalidDate(format!("se esperaba AAAA/MM/DD: {s}")));
    }
    NaiveDate::parse_from_str(s, FECHA_FORMAT).map_err(|e| DomainError::InvalidDate(e.to_string()))
}

/// Appointment create/update payload
///
/// Carries only a reference to the client; `TurnoService::materialize`
/// resolves it into a full snapshot.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnoRequest {
    /// Optional on create; a fresh id is generated when empty
    #[serde(default)]
    pub id: String,
    /// `YYYY/MM/DD`
    pub fecha: String,
    /// `HH:MM`
    pub hora: String,
    #[serde(rename = "clienteID")]
    pub cliente_id: String,
}

/// Appointment response body
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoResponse {
    pub id: String,
    pub fecha: String,
    pub hora: String,
    #[serde(rename = "clienteID")]
    pub cliente_id: String,
    /// Client data as joined at read time
    pub cliente: ClienteResponse,
}

impl TurnoResponse {
    /// Create from domain entity
    pub fn from_domain(turno: &Turno) -> Self {
        Self {
            id: turno.id.clone(),
            fecha: turno
                .fecha
                .map(|f| f.format(FECHA_FORMAT).to_string())
                .unwrap_or_default(),
            hora: turno.hora.to_string(),
            cliente_id: turno.cliente.id.clone(),
            cliente: ClienteResponse::from_domain(&turno.cliente),
        }
    }
}
