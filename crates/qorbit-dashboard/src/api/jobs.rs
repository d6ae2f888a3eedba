//! Job proxy endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use qorbit_bloch::{BlochPayload, BlochVector, process_bloch_data};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the job list.
#[derive(Debug, Default, Deserialize)]
pub struct JobListParams {
    /// Maximum number of jobs to return.
    pub limit: Option<usize>,
    /// Offset into the upstream list.
    pub offset: Option<usize>,
}

/// GET /api/jobs - Forward the upstream job list.
pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<JobListParams>,
) -> Result<Json<Value>, ApiError> {
    let limit = params.limit.or(state.config.default_limit);
    let body = state.source.list_jobs(limit, params.offset).await?;
    Ok(Json(body))
}

/// GET /api/jobs/:id - Forward one job's details.
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let body = state.source.get_job(&id).await?;
    Ok(Json(body))
}

/// GET /api/jobs/:id/bloch - The job's Bloch payload, processed and
/// normalized for the 3-D state plot.
pub async fn get_job_bloch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BlochVector>, ApiError> {
    let mut body = state.source.get_job(&id).await?;

    let bloch_value = match body.get_mut("bloch") {
        Some(v) if !v.is_null() => v.take(),
        _ => {
            return Err(ApiError::NotFound(format!(
                "Job {id} has no Bloch data"
            )));
        }
    };

    let payload: BlochPayload = serde_json::from_value(bloch_value)
        .map_err(|e| ApiError::BadRequest(format!("Malformed Bloch payload: {e}")))?;

    let vector = process_bloch_data(&payload)?;
    Ok(Json(vector))
}
