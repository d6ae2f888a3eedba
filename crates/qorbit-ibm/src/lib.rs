//! IBM Quantum Cloud API client.
//!
//! Implements the slice of the IBM Quantum Cloud REST API the dashboard
//! proxies:
//!
//! - IAM token exchange: an IBM Cloud API key is exchanged for a bearer
//!   token at `iam.cloud.ibm.com`, and every subsequent request carries the
//!   token plus the `Service-CRN` and `IBM-API-Version` headers.
//! - `GET /v1/jobs` — job list.
//! - `GET /v1/jobs/{id}` — job detail.
//!
//! Responses are passed through as raw JSON; the dashboard forwards them
//! unmodified and validates typed fields only where it consumes them
//! itself. Requests are single-shot: there is no retry or caching layer.

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::IbmClient;
pub use config::IbmConfig;
pub use error::{IbmError, IbmResult};
pub use source::JobSource;

/// IBM Quantum Cloud API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://quantum.cloud.ibm.com/api";

/// IBM Cloud IAM token endpoint.
pub const IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Default `IBM-API-Version` header value.
pub const DEFAULT_API_VERSION: &str = "2025-05-01";
