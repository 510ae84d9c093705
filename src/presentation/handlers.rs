// HTTP request handlers
use crate::application::dashboard_service::LoadOutcome;
use crate::infrastructure::memory_view::ViewSnapshot;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
pub struct ViewResponse {
    #[serde(flatten)]
    pub snapshot: ViewSnapshot,
    pub last_load: Option<LoadOutcome>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/view", get(get_view))
        .route("/refresh", post(refresh))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current contents of every hosted target
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<ViewResponse> {
    Json(ViewResponse {
        snapshot: state.view.snapshot(),
        last_load: state.dashboard_service.last_outcome().await,
    })
}

/// Re-run the fetch/decode/render pipeline
pub async fn refresh(State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.load().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
