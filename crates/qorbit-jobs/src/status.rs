//! Job status vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Execution status of a job.
///
/// The upstream API types this as a plain string; the known values get
/// proper variants and anything new passes through [`JobStatus::Other`]
/// untouched so a vocabulary change upstream cannot break deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Completed,
    Running,
    Failed,
    Pending,
    Queued,
    /// A status string this client does not know about.
    #[serde(untagged)]
    Other(String),
}

impl JobStatus {
    /// Parse a status string, case-insensitively, into a known variant.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "completed" => JobStatus::Completed,
            "running" => JobStatus::Running,
            "failed" => JobStatus::Failed,
            "pending" => JobStatus::Pending,
            "queued" => JobStatus::Queued,
            _ => JobStatus::Other(s.to_string()),
        }
    }

    /// Whether the job can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// Badge color used by the frontend for this status.
    pub fn color(&self) -> &'static str {
        match self {
            JobStatus::Completed => "success",
            JobStatus::Running => "primary",
            JobStatus::Failed => "destructive",
            JobStatus::Pending | JobStatus::Queued => "warning",
            JobStatus::Other(_) => "secondary",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Completed => f.write_str("Completed"),
            JobStatus::Running => f.write_str("Running"),
            JobStatus::Failed => f.write_str("Failed"),
            JobStatus::Pending => f.write_str("Pending"),
            JobStatus::Queued => f.write_str("Queued"),
            JobStatus::Other(s) => f.write_str(s),
        }
    }
}
