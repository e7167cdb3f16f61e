use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::shopping::adapters::outbound::view_recording::{RecordingView, ViewEvent};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RecentProductsResponse {
    pub events: Vec<ViewEvent>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    // Both outcomes reach the view: recency_changed or load_failed.
    let _ = state.orchestrator.refresh_recency(&view).await;
    (
        StatusCode::OK,
        Json(RecentProductsResponse {
            events: view.take().await,
        }),
    )
}
