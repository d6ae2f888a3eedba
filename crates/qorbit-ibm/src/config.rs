//! Client configuration.

use crate::error::{IbmError, IbmResult};
use crate::{DEFAULT_API_VERSION, DEFAULT_ENDPOINT};

/// Connection settings for the IBM Quantum Cloud API.
#[derive(Debug, Clone)]
pub struct IbmConfig {
    /// IBM Cloud API key, exchanged for a bearer token at connect time.
    pub api_key: String,
    /// Service CRN of the Quantum Runtime instance.
    pub service_crn: String,
    /// `IBM-API-Version` header value.
    pub api_version: String,
    /// API base URL.
    pub endpoint: String,
}

impl IbmConfig {
    /// Build a config from explicit credentials with default endpoint and
    /// API version.
    pub fn new(api_key: impl Into<String>, service_crn: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            service_crn: service_crn.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Read credentials from the environment.
    ///
    /// `IBM_API_KEY` and `INSTANCE_CRN` are required; `API_VERSION`
    /// overrides the default header value.
    pub fn from_env() -> IbmResult<Self> {
        let api_key = std::env::var("IBM_API_KEY").map_err(|_| IbmError::MissingApiKey)?;
        let service_crn =
            std::env::var("INSTANCE_CRN").map_err(|_| IbmError::MissingServiceCrn)?;

        let mut config = Self::new(api_key, service_crn);
        if let Ok(version) = std::env::var("API_VERSION") {
            config.api_version = version;
        }
        Ok(config)
    }

    /// Override the API base URL (for pointing at a test server).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the `IBM-API-Version` header value.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }
}
