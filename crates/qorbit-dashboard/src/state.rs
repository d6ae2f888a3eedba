//! Application state for the dashboard server.

use std::net::SocketAddr;
use std::sync::Arc;

use qorbit_ibm::JobSource;

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Default page size forwarded to the upstream list endpoint when the
    /// request does not specify one.
    pub default_limit: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 8080).into(),
            default_limit: Some(200),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Upstream job source (IBM client in production, canned in tests).
    pub source: Arc<dyn JobSource>,
    /// Dashboard configuration.
    pub config: DashboardConfig,
}

impl AppState {
    /// Create application state around a job source.
    pub fn new(config: DashboardConfig, source: Arc<dyn JobSource>) -> Self {
        Self { source, config }
    }
}
