//! KPI and chart aggregations over a job list.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Job;
use crate::status::JobStatus;

/// Aggregations driving the KPI cards and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStats {
    /// Total number of jobs.
    pub total: usize,
    /// Jobs with status Completed.
    pub completed: usize,
    /// Jobs with status Running.
    pub running: usize,
    /// Jobs with status Failed.
    pub failed: usize,
    /// Mean cost in cents, 0 for an empty list.
    pub avg_cost: f64,
    /// Job count per status string, for the status pie chart.
    pub status_breakdown: BTreeMap<String, usize>,
    /// Job count per creation date (UTC), for the jobs-over-time chart.
    pub jobs_per_day: BTreeMap<NaiveDate, usize>,
}

impl JobStats {
    /// Compute stats over a job list.
    pub fn compute(jobs: &[Job]) -> Self {
        let mut status_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        let mut jobs_per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();

        for job in jobs {
            *status_breakdown.entry(job.status.to_string()).or_default() += 1;
            *jobs_per_day.entry(job.created.date_naive()).or_default() += 1;
        }

        let total = jobs.len();
        let avg_cost = if total > 0 {
            jobs.iter().map(|j| j.cost).sum::<f64>() / total as f64
        } else {
            0.0
        };

        Self {
            total,
            completed: count_status(jobs, &JobStatus::Completed),
            running: count_status(jobs, &JobStatus::Running),
            failed: count_status(jobs, &JobStatus::Failed),
            avg_cost,
            status_breakdown,
            jobs_per_day,
        }
    }
}

fn count_status(jobs: &[Job], status: &JobStatus) -> usize {
    jobs.iter().filter(|j| &j.status == status).count()
}
