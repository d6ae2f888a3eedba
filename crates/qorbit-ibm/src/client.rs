//! HTTP client for the IBM Quantum Cloud API.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use serde_json::Value;

use crate::IAM_TOKEN_URL;
use crate::config::IbmConfig;
use crate::error::{IbmError, IbmResult};

/// User-Agent sent with requests (Cloudflare blocks the default reqwest UA).
const USER_AGENT: &str = "qorbit/0.3 (job-dashboard; +https://github.com/qorbit-dev/qorbit)";

/// Authenticated IBM Quantum Cloud client.
///
/// Construction performs the IAM token exchange once; the resulting bearer
/// token rides in the default headers of every request. There is no token
/// refresh: callers reconnect when the token expires, mirroring the
/// per-request exchange the upstream proxy performed.
pub struct IbmClient {
    client: Client,
    endpoint: String,
}

impl fmt::Debug for IbmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbmClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// IAM token response from `iam.cloud.ibm.com`.
#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl IbmClient {
    /// Exchange the configured API key for a bearer token and build an
    /// authenticated client.
    pub async fn connect(config: &IbmConfig) -> IbmResult<Self> {
        let iam_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let iam_response = iam_client
            .post(IAM_TOKEN_URL)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!(
                "grant_type=urn:ibm:params:oauth:grant-type:apikey&apikey={}",
                config.api_key
            ))
            .send()
            .await
            .map_err(|e| IbmError::TokenExchange(e.to_string()))?;

        if !iam_response.status().is_success() {
            let status = iam_response.status();
            let body = iam_response
                .text()
                .await
                .unwrap_or_else(|_| "no body".to_string());
            return Err(IbmError::TokenExchange(format!(
                "IAM returned {status}: {body}"
            )));
        }

        let iam_token: IamTokenResponse = iam_response.json().await.map_err(|e| {
            IbmError::TokenExchange(format!("failed to parse IAM response: {e}"))
        })?;

        if let Some(expires_in) = iam_token.expires_in {
            tracing::debug!(expires_in, "obtained IAM bearer token");
        }

        Self::with_bearer_token(config, &iam_token.access_token)
    }

    /// Build a client around an already-obtained bearer token.
    pub fn with_bearer_token(config: &IbmConfig, bearer_token: &str) -> IbmResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {bearer_token}"))
                .map_err(|_| IbmError::InvalidCredentials)?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        // Service-CRN — required on every request
        headers.insert(
            header::HeaderName::from_static("service-crn"),
            header::HeaderValue::from_str(&config.service_crn)
                .map_err(|_| IbmError::InvalidCredentials)?,
        );
        headers.insert(
            header::HeaderName::from_static("ibm-api-version"),
            header::HeaderValue::from_str(&config.api_version)
                .map_err(|_| IbmError::InvalidCredentials)?,
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch the job list as raw JSON.
    pub async fn list_jobs(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> IbmResult<Value> {
        let url = format!("{}/v1/jobs", self.endpoint);

        let mut request = self.client.get(&url);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "no body".to_string());
            return Err(IbmError::Api {
                status: status.as_u16(),
                message: format!("list jobs failed: {body}"),
            });
        }

        response.json().await.map_err(IbmError::from)
    }

    /// Fetch one job's details as raw JSON.
    pub async fn get_job(&self, id: &str) -> IbmResult<Value> {
        let url = format!("{}/v1/jobs/{}", self.endpoint, id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            if response.status() == StatusCode::NOT_FOUND {
                return Err(IbmError::JobNotFound(id.to_string()));
            }
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "no body".to_string());
            return Err(IbmError::Api {
                status: status.as_u16(),
                message: format!("get job failed: {body}"),
            });
        }

        response.json().await.map_err(IbmError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iam_token_response_deserialization() {
        let json = r#"{
            "access_token": "eyJraWQiOi...",
            "refresh_token": "not_supported",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1756050000
        }"#;
        let token: IamTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "eyJraWQiOi...");
        assert_eq!(token.expires_in, Some(3600));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = IbmConfig::new("secret-key", "crn:v1:bluemix");
        let client = IbmClient::with_bearer_token(&config, "secret-bearer").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-bearer"));
    }

    #[test]
    fn test_invalid_crn_header_rejected() {
        let config = IbmConfig::new("key", "crn\nwith-newline");
        let err = IbmClient::with_bearer_token(&config, "token").unwrap_err();
        assert!(matches!(err, IbmError::InvalidCredentials));
    }
}
