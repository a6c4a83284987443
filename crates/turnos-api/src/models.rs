//! API request and response models
//!
//! Resource payloads are the DTOs of `turnos-application`; this module holds
//! the envelopes that belong to the HTTP layer only.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
    /// Storage backend in use
    pub database: String,
}
