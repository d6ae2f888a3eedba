//! KPI aggregation endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use qorbit_jobs::{Job, JobStats};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/stats - KPI aggregations over the current job list.
///
/// Fetches the upstream list, validates the records this endpoint actually
/// consumes, and aggregates server-side so every dashboard client does not
/// repeat the work.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<JobStats>, ApiError> {
    let mut body = state.source.list_jobs(state.config.default_limit, None).await?;

    let jobs_value = body
        .get_mut("jobs")
        .map(|v| v.take())
        .ok_or_else(|| ApiError::Upstream("job list response has no `jobs` field".into()))?;

    let jobs: Vec<Job> = serde_json::from_value(jobs_value)
        .map_err(|e| ApiError::Upstream(format!("unexpected job record shape: {e}")))?;

    Ok(Json(JobStats::compute(&jobs)))
}
