//! Validated record shapes for the upstream jobs API.
//!
//! Field-for-field these mirror the subset of the IBM Quantum Cloud job
//! schema the dashboard renders. Fields the API marks optional stay
//! `Option`; everything else is required and a record missing it is
//! rejected at deserialization time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use qorbit_bloch::BlochPayload;

use crate::status::JobStatus;

/// Nested state object on a job record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateInfo {
    /// Status string as reported inside `state`.
    pub status: String,
}

/// Reference to the Qiskit Runtime program a job ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRef {
    /// Program ID (e.g. "sampler").
    pub id: String,
    /// Human-readable program name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Billing system seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bss {
    pub seconds: f64,
}

/// Resource usage for a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// Seconds of quantum processor time.
    pub quantum_seconds: f64,
    /// Total wall-clock seconds.
    pub seconds: f64,
}

/// Circuit metrics attached to completed jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMetrics {
    /// Circuit depth.
    pub depth: u32,
    /// Circuit width (qubits used).
    pub width: u32,
    /// Fraction of shots matching the expected outcome.
    pub success_rate: f64,
}

/// A job as it appears in the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Upstream job ID.
    pub id: String,
    /// Backend the job ran on (e.g. "ibm_brisbane").
    pub backend: String,
    /// Nested state object.
    pub state: StateInfo,
    /// Program reference.
    pub program: ProgramRef,
    /// Owning IBMid.
    pub user_id: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// User-assigned tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Cost in cents.
    pub cost: f64,
    /// Billing system seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bss: Option<Bss>,
    /// Resource usage.
    pub usage: Usage,
    /// Top-level status.
    pub status: JobStatus,
}

/// Extended record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    #[serde(flatten)]
    pub job: Job,
    /// Number of shots requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    /// Position in the backend queue, if still queued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<u32>,
    /// Execution time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_time_seconds: Option<f64>,
    /// Completion timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<Utc>>,
    /// Circuit metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<JobMetrics>,
    /// Bloch payload for the 3-D state plot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloch: Option<BlochPayload>,
    /// Raw upstream request/result blobs, passed through untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Map<String, Value>>,
}

/// Envelope returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // A record as returned by the live list endpoint.
    const JOB_JSON: &str = r#"{
        "id": "d2kud4cg59ks73c524c0",
        "backend": "ibm_brisbane",
        "state": { "status": "Completed" },
        "program": { "id": "sampler", "name": "Sampler" },
        "user_id": "IBMid-6940012W0V",
        "created": "2025-08-23T16:04:33.285627Z",
        "tags": ["Composer"],
        "cost": 10000,
        "bss": { "seconds": 1 },
        "usage": { "quantum_seconds": 1, "seconds": 1 },
        "status": "Completed"
    }"#;

    #[test]
    fn test_job_deserializes_from_upstream_record() {
        let job: Job = serde_json::from_str(JOB_JSON).unwrap();
        assert_eq!(job.id, "d2kud4cg59ks73c524c0");
        assert_eq!(job.backend, "ibm_brisbane");
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.state.status, "Completed");
        assert_eq!(job.program.name.as_deref(), Some("Sampler"));
        assert_eq!(job.cost, 10000.0);
        assert_eq!(job.created.timestamp(), 1755965073);
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let json = r#"{
            "id": "a1",
            "backend": "ibm_osaka",
            "state": { "status": "Running" },
            "program": { "id": "optimizer" },
            "user_id": "IBMid-x",
            "created": "2025-08-24T10:15:42.123456Z",
            "cost": 0,
            "usage": { "quantum_seconds": 0, "seconds": 0 },
            "status": "Running"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.tags.is_none());
        assert!(job.bss.is_none());
        assert!(job.program.name.is_none());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        // No "usage"
        let json = r#"{
            "id": "a1",
            "backend": "ibm_osaka",
            "state": { "status": "Running" },
            "program": { "id": "optimizer" },
            "user_id": "IBMid-x",
            "created": "2025-08-24T10:15:42Z",
            "cost": 0,
            "status": "Running"
        }"#;
        assert!(serde_json::from_str::<Job>(json).is_err());
    }

    #[test]
    fn test_details_extend_the_base_record() {
        let json = r#"{
            "id": "d2kud4cg59ks73c524c0",
            "backend": "ibm_brisbane",
            "state": { "status": "Completed" },
            "program": { "id": "sampler", "name": "Sampler" },
            "user_id": "IBMid-6940012W0V",
            "created": "2025-08-23T16:04:33.285627Z",
            "cost": 10000,
            "usage": { "quantum_seconds": 1, "seconds": 1 },
            "status": "Completed",
            "shots": 1024,
            "queue_position": 0,
            "run_time_seconds": 1.2,
            "completed": "2025-08-23T16:05:10Z",
            "metrics": { "depth": 12, "width": 3, "success_rate": 0.98 },
            "bloch": { "type": "vector", "data": [0.2, -0.1, 0.97] },
            "raw": { "results": { "counts": { "00": 512, "11": 512 } } }
        }"#;
        let details: JobDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.shots, Some(1024));
        assert_eq!(details.metrics.as_ref().unwrap().depth, 12);
        let bloch = details.bloch.as_ref().unwrap();
        assert_eq!(bloch.data, vec![0.2, -0.1, 0.97]);
        assert!(details.raw.unwrap().contains_key("results"));
    }

    #[test]
    fn test_list_envelope() {
        let json = format!(
            r#"{{ "jobs": [{JOB_JSON}], "count": 1, "limit": 200, "offset": 0 }}"#
        );
        let resp: JobsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp.jobs.len(), 1);
        assert_eq!(resp.limit, 200);
    }

    #[test]
    fn test_serialization_round_trip() {
        let job: Job = serde_json::from_str(JOB_JSON).unwrap();
        let back: Job = serde_json::from_str(&serde_json::to_string(&job).unwrap()).unwrap();
        assert_eq!(job, back);
    }
}
