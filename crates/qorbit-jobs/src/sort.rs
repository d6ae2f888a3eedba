//! Job-table sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Job;

/// Sortable job-table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Backend,
    Status,
    Created,
    Cost,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort configuration for the job table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl JobSort {
    /// Ascending sort on a column.
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a column.
    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// The configuration after clicking a column header: clicking the
    /// currently ascending column flips it to descending, anything else
    /// starts ascending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Asc {
            Self::desc(key)
        } else {
            Self::asc(key)
        }
    }

    /// Sort a job list in place. Equal keys keep their relative order.
    pub fn apply(&self, jobs: &mut [Job]) {
        jobs.sort_by(|a, b| self.compare(a, b));
    }

    /// Compare two jobs under this configuration.
    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        let ordering = match self.key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Backend => a.backend.cmp(&b.backend),
            SortKey::Status => a.status.to_string().cmp(&b.status.to_string()),
            SortKey::Created => a.created.cmp(&b.created),
            SortKey::Cost => a.cost.total_cmp(&b.cost),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}
