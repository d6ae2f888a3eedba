//! Job data model and dashboard-side transforms.
//!
//! The upstream IBM Quantum jobs API returns loosely structured JSON; this
//! crate pins down the subset of it the dashboard consumes:
//!
//! - [`Job`] / [`JobDetails`] / [`JobsResponse`] — the validated record
//!   shapes, tolerant of the optional fields the API omits per job.
//! - [`JobFilters`] — search/backend/status/date filtering with AND
//!   semantics, applied client-side over a fetched job list.
//! - [`JobSort`] — asc/desc column sorting for the job table, with the
//!   header-click toggle behavior.
//! - [`JobStats`] — the KPI and chart aggregations (totals, status
//!   breakdown, jobs per day, average cost).
//! - [`format`] — display formatting for costs, durations, and timestamps.

pub mod filter;
pub mod format;
pub mod model;
pub mod sort;
pub mod stats;
pub mod status;

pub use filter::{DateRange, JobFilters, available_backends};
pub use model::{Bss, Job, JobDetails, JobMetrics, JobsResponse, ProgramRef, StateInfo, Usage};
pub use sort::{JobSort, SortDirection, SortKey};
pub use stats::JobStats;
pub use status::JobStatus;
