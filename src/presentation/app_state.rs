// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::memory_view::MemoryView;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub view: Arc<MemoryView>,
}
