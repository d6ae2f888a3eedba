//! Qorbit dashboard binary entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qorbit_dashboard::{AppState, DashboardConfig, create_router};
use qorbit_ibm::{IbmClient, IbmConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qorbit_dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = DashboardConfig::default();
    if let Ok(bind) = std::env::var("QORBIT_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid QORBIT_BIND address '{bind}': {e}"))?;
    }
    let bind_addr = config.bind_address;

    // Authenticate against IBM Quantum Cloud
    let ibm_config = IbmConfig::from_env()?;
    let client = IbmClient::connect(&ibm_config).await?;
    tracing::info!("Authenticated with IBM Quantum Cloud");

    // Create application state and router
    let state = Arc::new(AppState::new(config, Arc::new(client)));
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting qorbit dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
