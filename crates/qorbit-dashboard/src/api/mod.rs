//! API endpoint handlers.

pub mod health;
pub mod jobs;
pub mod stats;
