//! Error types for the IBM Quantum client.

use thiserror::Error;

/// Result type for IBM operations.
pub type IbmResult<T> = Result<T, IbmError>;

/// Errors from the IBM Quantum Cloud API.
#[derive(Debug, Error)]
pub enum IbmError {
    /// API key not configured.
    #[error("IBM API key not found. Set the IBM_API_KEY environment variable.")]
    MissingApiKey,

    /// Service CRN not configured.
    #[error("IBM service CRN not found. Set the INSTANCE_CRN environment variable.")]
    MissingServiceCrn,

    /// The API key could not be used to build request headers.
    #[error("Invalid IBM Quantum credentials")]
    InvalidCredentials,

    /// IAM token exchange failed.
    #[error("IAM token exchange failed: {0}")]
    TokenExchange(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("IBM Quantum API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or message.
        message: String,
    },

    /// Job not found.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
