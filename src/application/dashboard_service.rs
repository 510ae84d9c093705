// Dashboard service - Fetch, decode and render pipeline
use crate::application::dashboard_renderer::{DashboardRenderer, RenderReport};
use crate::application::errors::DashboardError;
use crate::application::summary_fetcher::SummaryFetcher;
use crate::application::summary_parser::parse_summary;
use crate::application::view_targets::ViewTargets;
use crate::domain::summary::SummaryRecord;
use crate::infrastructure::config::StatusConfig;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Result of the most recent load, exposed to the view endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadOutcome {
    pub finished_at: String,
    pub succeeded: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct DashboardService {
    fetcher: Arc<dyn SummaryFetcher>,
    view: Arc<dyn ViewTargets>,
    renderer: Arc<Mutex<DashboardRenderer>>,
    status: Option<StatusConfig>,
    last_outcome: Arc<Mutex<Option<LoadOutcome>>>,
}

impl DashboardService {
    pub fn new(
        fetcher: Arc<dyn SummaryFetcher>,
        view: Arc<dyn ViewTargets>,
        renderer: DashboardRenderer,
        status: Option<StatusConfig>,
    ) -> Self {
        Self {
            fetcher,
            view,
            renderer: Arc::new(Mutex::new(renderer)),
            status,
            last_outcome: Arc::new(Mutex::new(None)),
        }
    }

    /// Run the pipeline once. Fetch and decode failures abort before any
    /// display target is touched (apart from the status target, if any).
    pub async fn load(&self) -> Result<RenderReport, DashboardError> {
        tracing::info!("Loading dashboard summary");

        let record = match self.fetch_summary().await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Failed to load dashboard: {}", e);
                self.finish(Some(e.to_string())).await;
                return Err(e);
            }
        };

        let report = self.renderer.lock().await.render(&record);
        tracing::info!(
            "Dashboard rendered: {} cards, {} charts, {} missing targets",
            report.cards_written.len(),
            report.charts_drawn.len(),
            report.missing_targets.len()
        );

        self.finish(None).await;
        Ok(report)
    }

    pub async fn last_outcome(&self) -> Option<LoadOutcome> {
        self.last_outcome.lock().await.clone()
    }

    async fn fetch_summary(&self) -> Result<SummaryRecord, DashboardError> {
        let body = self.fetcher.fetch().await?;
        parse_summary(&body)
    }

    async fn finish(&self, error: Option<String>) {
        self.show_status(error.is_none());

        let outcome = LoadOutcome {
            finished_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            succeeded: error.is_none(),
            error,
        };
        *self.last_outcome.lock().await = Some(outcome);
    }

    fn show_status(&self, succeeded: bool) {
        let Some(status) = &self.status else {
            return;
        };

        match self.view.text(&status.target) {
            Some(element) => {
                let message = if succeeded { &status.loaded } else { &status.failed };
                element.set_text(message);
            }
            None => tracing::debug!("Status target {} not in view", status.target),
        }
    }
}
