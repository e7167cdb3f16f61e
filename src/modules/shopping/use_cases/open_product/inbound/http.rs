use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;

use crate::modules::shopping::adapters::outbound::view_recording::{RecordingView, ViewEvent};
use crate::modules::shopping::core::product::{Product, ProductId};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct OpenProductResponse {
    pub product: Product,
    /// Product viewed just before this one. Absent when this product already was the latest.
    pub previous: Option<Product>,
    pub recorded: bool,
    pub events: Vec<ViewEvent>,
}

#[derive(Serialize)]
pub struct OpenFailedResponse {
    pub events: Vec<ViewEvent>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    let product = match state.product(product_id).await {
        Ok(product) => product,
        Err(status) => return status.into_response(),
    };

    let view = RecordingView::new();
    let now = Utc::now().timestamp_millis();

    match state.orchestrator.open_product(&view, &product, now).await {
        Ok(opened) => (
            StatusCode::OK,
            Json(OpenProductResponse {
                product,
                previous: opened.previous,
                recorded: opened.history.is_applied(),
                events: view.take().await,
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::OK,
            Json(OpenFailedResponse {
                events: view.take().await,
            }),
        )
            .into_response(),
    }
}
