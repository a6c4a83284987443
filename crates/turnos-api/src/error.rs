//! API error types and handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use turnos_application::ApplicationError;
use turnos_domain::DomainError;

use crate::models::ErrorResponse;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, not JSON, or not matching the expected shape
    #[error("invalid request body")]
    InvalidBody(#[from] JsonRejection),

    /// Date path segment not in `YYYY/MM/DD` form
    #[error("formato de fecha invalido")]
    InvalidFecha,

    /// Failure reported by a service
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Application(err.into())
    }
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidFecha => StatusCode::BAD_REQUEST,
            ApiError::Application(err) => match err {
                ApplicationError::ValidationFailed(_) | ApplicationError::ReferenceNotFound(_) => {
                    StatusCode::BAD_REQUEST
                }
                ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
                ApplicationError::RepositoryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                ApplicationError::Cancelled(DomainError::DeadlineExceeded) => {
                    StatusCode::GATEWAY_TIMEOUT
                }
                ApplicationError::Cancelled(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::warn!(%status, error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
