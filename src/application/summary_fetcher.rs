// Fetcher trait for the dashboard summary resource
use crate::application::errors::DashboardError;
use async_trait::async_trait;

#[async_trait]
pub trait SummaryFetcher: Send + Sync {
    /// Issue one request for the summary resource and return the raw body.
    /// No retries; a single best-effort attempt per call.
    async fn fetch(&self) -> Result<String, DashboardError>;
}
