use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::shopping::adapters::outbound::view_recording::{RecordingView, ViewEvent};
use crate::modules::shopping::use_cases::errors::ApplicationError;
use crate::modules::shopping::use_cases::load_catalog::handler::CatalogPage;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CatalogResponse {
    pub loaded_count: usize,
    pub is_end_of_catalog: bool,
    pub events: Vec<ViewEvent>,
}

#[derive(Serialize)]
pub struct LoadFailedResponse {
    pub events: Vec<ViewEvent>,
}

pub async fn handle_load(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    let result = state.orchestrator.load_initial(&view).await;
    respond(&state, view, result).await
}

pub async fn handle_more(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    let result = state.orchestrator.load_more(&view).await;
    respond(&state, view, result).await
}

pub async fn handle_reload(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    let result = state.orchestrator.reload(&view).await;
    respond(&state, view, result).await
}

async fn respond(
    state: &AppState,
    view: RecordingView,
    result: Result<CatalogPage, ApplicationError>,
) -> axum::response::Response {
    let events = view.take().await;
    match result {
        Ok(page) => (
            StatusCode::OK,
            Json(CatalogResponse {
                loaded_count: state.orchestrator.loaded_count().await,
                is_end_of_catalog: page.is_end_of_catalog,
                events,
            }),
        )
            .into_response(),
        // The failure reached the view as load_failed. The window is unchanged.
        Err(_) => (StatusCode::OK, Json(LoadFailedResponse { events })).into_response(),
    }
}
