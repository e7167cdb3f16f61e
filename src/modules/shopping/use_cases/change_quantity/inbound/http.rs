use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::shopping::adapters::outbound::view_recording::{RecordingView, ViewEvent};
use crate::modules::shopping::core::product::ProductId;
use crate::modules::shopping::use_cases::change_quantity::handler::QuantityChange;
use crate::modules::shopping::use_cases::errors::Settlement;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ChangeQuantityResponse {
    /// False when the store failed and the displayed quantity was left as it was.
    pub applied: bool,
    /// Quantity after the change, 0 after a removal. Absent when nothing changed.
    pub quantity: Option<u32>,
    /// True when the change stood but the cart count could not be refreshed.
    pub count_swallowed: bool,
    pub events: Vec<ViewEvent>,
}

pub async fn handle_increase(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    change(state, product_id, QuantityChange::Increase).await
}

pub async fn handle_decrease(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    change(state, product_id, QuantityChange::Decrease).await
}

async fn change(
    state: AppState,
    product_id: ProductId,
    change: QuantityChange,
) -> axum::response::Response {
    let product = match state.product(product_id).await {
        Ok(product) => product,
        Err(status) => return status.into_response(),
    };

    let view = RecordingView::new();
    let settlement = match change {
        QuantityChange::Increase => state.orchestrator.increase(&view, &product).await,
        QuantityChange::Decrease => state.orchestrator.decrease(&view, &product).await,
    };

    let (quantity, count_swallowed) = match &settlement {
        Settlement::Applied(mutation) => (
            mutation.outcome.displayed_quantity(),
            mutation.is_count_swallowed(),
        ),
        Settlement::Swallowed(_) => (None, false),
    };

    (
        StatusCode::OK,
        Json(ChangeQuantityResponse {
            applied: settlement.is_applied(),
            quantity,
            count_swallowed,
            events: view.take().await,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod change_quantity_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::products::make_product;
    use crate::tests::fixtures::state::make_test_state;

    use super::{handle_decrease, handle_increase};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/products/{id}/increase", post(handle_increase))
            .route("/products/{id}/decrease", post(handle_decrease))
            .with_state(state)
    }

    async fn post_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_increase_an_existing_line_item() {
        let state = make_test_state();
        state.cart.create_line_item(&make_product(1), 3).await.unwrap();

        let (status, json) = post_json(app(state), "/products/1/increase").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["applied"], true);
        assert_eq!(json["quantity"], 4);
        assert_eq!(json["count_swallowed"], false);
        assert_eq!(json["events"][0]["type"], "line_item_quantity_changed");
        assert_eq!(json["events"][1]["count"], 1);
    }

    #[tokio::test]
    async fn it_should_report_a_removal_as_quantity_zero() {
        let state = make_test_state();
        state.cart.create_line_item(&make_product(2), 1).await.unwrap();

        let (_, json) = post_json(app(state.clone()), "/products/2/decrease").await;

        assert_eq!(json["quantity"], 0);
        assert!(state.cart.list_line_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn it_should_swallow_a_store_failure() {
        let state = make_test_state();
        state.cart.toggle_offline();

        let (status, json) = post_json(app(state), "/products/1/increase").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["applied"], false);
        assert_eq!(json["events"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_flag_a_count_that_could_not_be_refreshed() {
        let state = make_test_state();
        state.cart.toggle_count_offline();

        let (status, json) = post_json(app(state), "/products/1/increase").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["applied"], true);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["count_swallowed"], true);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_product() {
        let (status, _) = post_json(app(make_test_state()), "/products/999/increase").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
