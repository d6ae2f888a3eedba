//! Qorbit dashboard server.
//!
//! A thin proxy between the browser dashboard and the IBM Quantum Cloud
//! API. The server holds the IBM credentials so the browser never sees
//! them; job-list and job-detail responses are forwarded as-is, and two
//! processed endpoints serve data the frontend would otherwise have to
//! derive itself:
//!
//! - `GET /api/jobs/{id}/bloch` — the job's Bloch payload run through the
//!   normalizing processor, ready for the 3-D plot.
//! - `GET /api/stats` — KPI aggregations over the current job list.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qorbit_dashboard::{AppState, DashboardConfig, create_router};
//! use qorbit_ibm::{IbmClient, IbmConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let ibm = IbmConfig::from_env().unwrap();
//!     let client = IbmClient::connect(&ibm).await.unwrap();
//!
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::new(config.clone(), Arc::new(client)));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod error;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, DashboardConfig};
