use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::modules::shopping::adapters::outbound::view_recording::{RecordingView, ViewEvent};
use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::product::ProductId;
use crate::modules::shopping::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CheckedBody {
    pub is_checked: bool,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub events: Vec<ViewEvent>,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub line_item_ids: Vec<LineItemId>,
    pub events: Vec<ViewEvent>,
}

pub async fn handle_show(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    let result = state.orchestrator.show_cart(&view).await;
    respond(view, result).await
}

pub async fn handle_next_page(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    let result = state.orchestrator.next_cart_page(&view).await;
    respond(view, result).await
}

pub async fn handle_previous_page(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    let result = state.orchestrator.previous_cart_page(&view).await;
    respond(view, result).await
}

pub async fn handle_order(State(state): State<AppState>) -> impl IntoResponse {
    let view = RecordingView::new();
    match state.orchestrator.order(&view).await {
        Ok(line_item_ids) => (
            StatusCode::OK,
            Json(OrderResponse {
                line_item_ids,
                events: view.take().await,
            }),
        )
            .into_response(),
        Err(ApplicationError::Rejected(_)) => StatusCode::CONFLICT.into_response(),
        Err(error) => respond::<()>(view, Err(error)).await,
    }
}

pub async fn handle_increase(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    let line_item = match find_line_item(&state, product_id).await {
        Ok(line_item) => line_item,
        Err(status) => return status.into_response(),
    };
    let view = RecordingView::new();
    let result = state.orchestrator.increase_line_item(&view, &line_item).await;
    respond(view, result).await
}

pub async fn handle_decrease(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    let line_item = match find_line_item(&state, product_id).await {
        Ok(line_item) => line_item,
        Err(status) => return status.into_response(),
    };
    let view = RecordingView::new();
    let result = state.orchestrator.decrease_line_item(&view, &line_item).await;
    respond(view, result).await
}

pub async fn handle_remove(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    let line_item = match find_line_item(&state, product_id).await {
        Ok(line_item) => line_item,
        Err(status) => return status.into_response(),
    };
    let view = RecordingView::new();
    let result = state.orchestrator.remove_line_item(&view, &line_item).await;
    respond(view, result).await
}

pub async fn handle_set_checked(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<CheckedBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let line_item = match find_line_item(&state, product_id).await {
        Ok(line_item) => line_item,
        Err(status) => return status.into_response(),
    };
    let view = RecordingView::new();
    let result = state
        .orchestrator
        .set_checked(&view, &line_item, body.is_checked)
        .await;
    respond(view, result).await
}

pub async fn handle_set_all_checked(
    State(state): State<AppState>,
    body: Result<Json<CheckedBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let view = RecordingView::new();
    let result = state.orchestrator.set_all_checked(&view, body.is_checked).await;
    respond(view, result).await
}

async fn find_line_item(state: &AppState, product_id: ProductId) -> Result<CartLineItem, StatusCode> {
    match state.orchestrator.find_line_item(product_id).await {
        Ok(Some(line_item)) => Ok(line_item),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(error) => {
            warn!(product_id, %error, "line item lookup failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn respond<T>(view: RecordingView, result: Result<T, ApplicationError>) -> Response {
    // Failures already reached the view as action_failed.
    let status = match result {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(CartResponse {
            events: view.take().await,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod edit_cart_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{delete, get, post, put},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::products::make_product;
    use crate::tests::fixtures::state::make_test_state;

    use super::{
        handle_decrease, handle_increase, handle_next_page, handle_order, handle_previous_page,
        handle_remove, handle_set_all_checked, handle_set_checked, handle_show,
    };

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/cart", get(handle_show))
            .route("/cart/next", post(handle_next_page))
            .route("/cart/previous", post(handle_previous_page))
            .route("/cart/order", post(handle_order))
            .route("/cart/checked", put(handle_set_all_checked))
            .route("/cart/products/{id}", delete(handle_remove))
            .route("/cart/products/{id}/increase", post(handle_increase))
            .route("/cart/products/{id}/decrease", post(handle_decrease))
            .route("/cart/products/{id}/checked", put(handle_set_checked))
            .with_state(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_list_the_cart() {
        let state = make_test_state();
        state.cart.create_line_item(&make_product(1), 2).await.unwrap();

        let (status, json) = send(
            app(state),
            Request::get("/cart").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["events"][0]["type"], "cart_changed");
        assert_eq!(json["events"][0]["line_items"][0]["quantity"], 2);
        assert_eq!(json["events"][1]["type"], "cart_navigation_changed");
        assert_eq!(json["events"][2]["is_all_checked"], true);
        assert_eq!(json["events"][3]["quantity"], 2);
    }

    #[tokio::test]
    async fn it_should_move_to_the_next_and_previous_page() {
        let state = make_test_state();
        for id in 1..=6 {
            state.cart.create_line_item(&make_product(id), 1).await.unwrap();
        }

        let (status, json) = send(
            app(state.clone()),
            Request::post("/cart/next").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["events"][0]["line_items"][0]["product"]["id"], 6);
        assert_eq!(json["events"][1]["navigation"]["page"], 2);
        assert_eq!(json["events"][1]["navigation"]["is_last_page"], true);

        let (_, json) = send(
            app(state),
            Request::post("/cart/previous").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(json["events"][1]["navigation"]["page"], 1);
    }

    #[tokio::test]
    async fn it_should_order_the_checked_line_items() {
        let state = make_test_state();
        state.cart.create_line_item(&make_product(1), 1).await.unwrap();
        state.cart.create_line_item(&make_product(2), 1).await.unwrap();
        state.cart.patch_checked(1, false).await.unwrap();

        let (status, json) = send(
            app(state),
            Request::post("/cart/order").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["line_item_ids"], serde_json::json!([2]));
        assert_eq!(json["events"][0]["type"], "order_requested");
    }

    #[tokio::test]
    async fn it_should_return_409_when_ordering_an_empty_selection() {
        let (status, _) = send(
            app(make_test_state()),
            Request::post("/cart/order").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_remove_at_zero_from_the_cart_screen() {
        let state = make_test_state();
        state.cart.create_line_item(&make_product(1), 1).await.unwrap();

        let (status, _) = send(
            app(state.clone()),
            Request::post("/cart/products/1/decrease")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(state.cart.list_line_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn it_should_increase_and_remove_line_items() {
        let state = make_test_state();
        state.cart.create_line_item(&make_product(1), 1).await.unwrap();

        send(
            app(state.clone()),
            Request::post("/cart/products/1/increase")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(state.cart.list_line_items().await.unwrap()[0].quantity, 2);

        let (status, _) = send(
            app(state.clone()),
            Request::delete("/cart/products/1").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(state.cart.list_line_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn it_should_update_selection() {
        let state = make_test_state();
        state.cart.create_line_item(&make_product(1), 1).await.unwrap();
        state.cart.create_line_item(&make_product(2), 1).await.unwrap();

        send(
            app(state.clone()),
            json_request("PUT", "/cart/products/1/checked", r#"{"is_checked":false}"#),
        )
        .await;
        assert!(!state.cart.list_line_items().await.unwrap()[0].is_checked);

        send(
            app(state.clone()),
            json_request("PUT", "/cart/checked", r#"{"is_checked":false}"#),
        )
        .await;
        let line_items = state.cart.list_line_items().await.unwrap();
        assert!(line_items.iter().all(|item| !item.is_checked));
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_product_not_in_the_cart() {
        let (status, _) = send(
            app(make_test_state()),
            Request::post("/cart/products/1/increase")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let (status, _) = send(
            app(make_test_state()),
            json_request("PUT", "/cart/checked", "not-json"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_report_a_failed_listing() {
        let state = make_test_state();
        state.cart.toggle_offline();

        let (status, json) = send(
            app(state),
            Request::get("/cart").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["events"][0]["type"], "action_failed");
    }
}
