//! The job-source seam between the dashboard and the upstream API.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::IbmClient;
use crate::error::IbmResult;

/// Anything that can serve job-list and job-detail documents.
///
/// The dashboard server holds an `Arc<dyn JobSource>`; production wires in
/// [`IbmClient`], tests wire in a canned source.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch the job list document.
    async fn list_jobs(&self, limit: Option<usize>, offset: Option<usize>) -> IbmResult<Value>;

    /// Fetch one job's detail document.
    async fn get_job(&self, id: &str) -> IbmResult<Value>;
}

#[async_trait]
impl JobSource for IbmClient {
    async fn list_jobs(&self, limit: Option<usize>, offset: Option<usize>) -> IbmResult<Value> {
        IbmClient::list_jobs(self, limit, offset).await
    }

    async fn get_job(&self, id: &str) -> IbmResult<Value> {
        IbmClient::get_job(self, id).await
    }
}
