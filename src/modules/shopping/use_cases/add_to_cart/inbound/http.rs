use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::shopping::adapters::outbound::view_recording::{RecordingView, ViewEvent};
use crate::modules::shopping::core::product::ProductId;
use crate::modules::shopping::use_cases::add_to_cart::command::AddToCart;
use crate::modules::shopping::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddToCartBody {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Serialize)]
pub struct AddToCartResponse {
    pub line_item_id: i64,
    pub quantity: u32,
    /// True when the line item was stored but the cart count could not be refreshed.
    pub count_swallowed: bool,
    pub events: Vec<ViewEvent>,
}

#[derive(Serialize)]
pub struct AddToCartFailure {
    pub events: Vec<ViewEvent>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddToCartBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let product = match state.product(body.product_id).await {
        Ok(product) => product,
        Err(status) => return status.into_response(),
    };

    let view = RecordingView::new();
    let command = AddToCart {
        product,
        quantity: body.quantity,
    };

    match state.orchestrator.add_to_cart(&view, command).await {
        Ok(mutation) => (
            StatusCode::CREATED,
            Json(AddToCartResponse {
                line_item_id: mutation.outcome.id,
                quantity: mutation.outcome.quantity,
                count_swallowed: mutation.is_count_swallowed(),
                events: view.take().await,
            }),
        )
            .into_response(),
        Err(ApplicationError::Rejected(_)) => StatusCode::CONFLICT.into_response(),
        // The failure already reached the view as action_failed.
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(AddToCartFailure {
                events: view.take().await,
            }),
        )
            .into_response(),
    }
}
