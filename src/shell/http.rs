use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::shopping::use_cases::add_to_cart::inbound::http as add_to_cart_http;
use crate::modules::shopping::use_cases::change_quantity::inbound::http as change_quantity_http;
use crate::modules::shopping::use_cases::edit_cart::inbound::http as edit_cart_http;
use crate::modules::shopping::use_cases::load_catalog::inbound::http as load_catalog_http;
use crate::modules::shopping::use_cases::open_product::inbound::http as open_product_http;
use crate::modules::shopping::use_cases::show_recent_products::inbound::http as recent_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/catalog/load", post(load_catalog_http::handle_load))
        .route("/catalog/more", post(load_catalog_http::handle_more))
        .route("/catalog/reload", post(load_catalog_http::handle_reload))
        .route("/products/{id}/open", post(open_product_http::handle))
        .route(
            "/products/{id}/increase",
            post(change_quantity_http::handle_increase),
        )
        .route(
            "/products/{id}/decrease",
            post(change_quantity_http::handle_decrease),
        )
        .route(
            "/cart",
            get(edit_cart_http::handle_show).post(add_to_cart_http::handle),
        )
        .route("/cart/next", post(edit_cart_http::handle_next_page))
        .route("/cart/previous", post(edit_cart_http::handle_previous_page))
        .route("/cart/order", post(edit_cart_http::handle_order))
        .route("/cart/checked", put(edit_cart_http::handle_set_all_checked))
        .route("/cart/products/{id}", delete(edit_cart_http::handle_remove))
        .route(
            "/cart/products/{id}/increase",
            post(edit_cart_http::handle_increase),
        )
        .route(
            "/cart/products/{id}/decrease",
            post(edit_cart_http::handle_decrease),
        )
        .route(
            "/cart/products/{id}/checked",
            put(edit_cart_http::handle_set_checked),
        )
        .route("/recent", get(recent_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
