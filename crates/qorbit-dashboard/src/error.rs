//! Error types for the dashboard API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<qorbit_ibm::IbmError> for ApiError {
    fn from(e: qorbit_ibm::IbmError) -> Self {
        use qorbit_ibm::IbmError;
        match e {
            IbmError::JobNotFound(id) => ApiError::NotFound(format!("Job not found: {id}")),
            IbmError::Http(_) | IbmError::Api { .. } | IbmError::TokenExchange(_) => {
                ApiError::Upstream(e.to_string())
            }
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<qorbit_bloch::BlochError> for ApiError {
    fn from(e: qorbit_bloch::BlochError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
