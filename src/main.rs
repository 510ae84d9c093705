// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::dashboard_renderer::DashboardRenderer;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_fetcher::HttpSummaryFetcher;
use crate::infrastructure::memory_view::MemoryView;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "energia_dashboard=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Hosted view and summary source (infrastructure layer)
    let view = Arc::new(MemoryView::new(
        config.view.text_targets.clone(),
        config.view.canvas_targets.clone(),
    ));
    let fetcher = Arc::new(HttpSummaryFetcher::new(config.source.summary_url()));
    tracing::info!("Dashboard summary source: {}", fetcher.url());

    // Pipeline (application layer)
    let renderer = DashboardRenderer::new(view.clone(), config.bindings(), config.currency.clone());
    let dashboard_service =
        DashboardService::new(fetcher, view.clone(), renderer, config.status.clone());

    // The view keeps its empty state until a refresh succeeds
    if let Err(e) = dashboard_service.load().await {
        tracing::warn!("Initial dashboard load failed, serving empty view: {}", e);
    }

    let state = Arc::new(AppState {
        dashboard_service,
        view,
    });

    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting energia-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
