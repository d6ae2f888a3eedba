//! Client-side job filtering.
//!
//! Filters mirror the dashboard's filter bar: a free-text ID search, a
//! backend multi-select, a status multi-select, and a creation-date range.
//! All configured criteria must match (AND semantics); an empty criterion
//! matches everything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Job;
use crate::status::JobStatus;

/// Inclusive creation-date window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Whether `t` falls inside the window (inclusive on both ends).
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.from <= t && t <= self.to
    }
}

/// Filter criteria over a fetched job list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilters {
    /// Case-insensitive substring match on the job ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to these backends (empty = all).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backends: Vec<String>,
    /// Restrict to these statuses (empty = all).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<JobStatus>,
    /// Restrict to jobs created inside this window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl JobFilters {
    /// Whether a single job passes every configured criterion.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !job.id.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if !self.backends.is_empty() && !self.backends.contains(&job.backend) {
            return false;
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&job.status) {
            return false;
        }

        if let Some(range) = &self.date_range {
            if !range.contains(job.created) {
                return false;
            }
        }

        true
    }

    /// Filter a job list, preserving order.
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

/// Unique backends present in a job list, sorted, for the filter dropdown.
pub fn available_backends(jobs: &[Job]) -> Vec<String> {
    let mut backends: Vec<String> = jobs.iter().map(|j| j.backend.clone()).collect();
    backends.sort();
    backends.dedup();
    backends
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProgramRef, StateInfo, Usage};
    use chrono::TimeZone;

    fn job(id: &str, backend: &str, status: JobStatus, created_hour: u32) -> Job {
        Job {
            id: id.to_string(),
            backend: backend.to_string(),
            state: StateInfo {
                status: status.to_string(),
            },
            program: ProgramRef {
                id: "sampler".into(),
                name: None,
            },
            user_id: "IBMid-x".into(),
            created: Utc.with_ymd_and_hms(2025, 8, 24, created_hour, 0, 0).unwrap(),
            tags: None,
            cost: 100.0,
            bss: None,
            usage: Usage {
                quantum_seconds: 1.0,
                seconds: 1.0,
            },
            status,
        }
    }

    fn sample() -> Vec<Job> {
        vec![
            job("d2kud4cg59ks73c524c0", "ibm_brisbane", JobStatus::Completed, 8),
            job("a1b2c3d4", "ibm_osaka", JobStatus::Running, 10),
            job("b2c3d4e5", "ibm_kyoto", JobStatus::Failed, 12),
            job("c3d4e5f6", "ibm_brisbane", JobStatus::Queued, 14),
        ]
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let jobs = sample();
        assert_eq!(JobFilters::default().apply(&jobs).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let jobs = sample();
        let filters = JobFilters {
            search: Some("D2KUD".into()),
            ..Default::default()
        };
        let hits = filters.apply(&jobs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "d2kud4cg59ks73c524c0");
    }

    #[test]
    fn test_backend_filter() {
        let jobs = sample();
        let filters = JobFilters {
            backends: vec!["ibm_brisbane".into()],
            ..Default::default()
        };
        assert_eq!(filters.apply(&jobs).len(), 2);
    }

    #[test]
    fn test_status_filter() {
        let jobs = sample();
        let filters = JobFilters {
            statuses: vec![JobStatus::Running, JobStatus::Failed],
            ..Default::default()
        };
        assert_eq!(filters.apply(&jobs).len(), 2);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let jobs = sample();
        let filters = JobFilters {
            date_range: Some(DateRange {
                from: Utc.with_ymd_and_hms(2025, 8, 24, 10, 0, 0).unwrap(),
                to: Utc.with_ymd_and_hms(2025, 8, 24, 12, 0, 0).unwrap(),
            }),
            ..Default::default()
        };
        let hits = filters.apply(&jobs);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "a1b2c3d4");
        assert_eq!(hits[1].id, "b2c3d4e5");
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let jobs = sample();
        let filters = JobFilters {
            backends: vec!["ibm_brisbane".into()],
            statuses: vec![JobStatus::Queued],
            ..Default::default()
        };
        let hits = filters.apply(&jobs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c3d4e5f6");
    }

    #[test]
    fn test_available_backends_sorted_unique() {
        let jobs = sample();
        assert_eq!(
            available_backends(&jobs),
            vec!["ibm_brisbane", "ibm_kyoto", "ibm_osaka"]
        );
    }
}
