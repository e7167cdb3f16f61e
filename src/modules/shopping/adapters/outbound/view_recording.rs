// ShoppingView adapter that records every notification in arrival order.
//
// Used by tests to assert what the view observed, and by the HTTP shell to return the
// notifications of one request as its response body.

use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::cart_pager::CartNavigation;
use crate::modules::shopping::core::product::Product;
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::modules::shopping::core::shopping_product::ShoppingProductProjection;
use serde::Serialize;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    ProductsReplaced {
        products: Vec<ShoppingProductProjection>,
    },
    ProductsAppended {
        products: Vec<ShoppingProductProjection>,
    },
    LineItemQuantityChanged {
        product: Product,
        quantity: u32,
    },
    CartCountChanged {
        count: u32,
    },
    RecencyChanged {
        history: Vec<RecentlyViewedEntry>,
    },
    DetailRequested {
        product: Product,
        previous: Option<Product>,
    },
    AddCompleted {
        product: Product,
    },
    CartChanged {
        line_items: Vec<CartLineItem>,
    },
    CartNavigationChanged {
        navigation: CartNavigation,
    },
    AllCheckedChanged {
        is_all_checked: bool,
    },
    CheckedQuantityChanged {
        quantity: u32,
    },
    OrderRequested {
        line_item_ids: Vec<LineItemId>,
    },
    LoadFailed,
    ActionFailed {
        message: String,
    },
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().await.clone()
    }

    /// Drain the recorded events.
    pub async fn take(&self) -> Vec<ViewEvent> {
        std::mem::take(&mut *self.events.lock().await)
    }

    async fn record(&self, event: ViewEvent) {
        self.events.lock().await.push(event);
    }
}

#[async_trait::async_trait]
impl ShoppingView for RecordingView {
    async fn products_replaced(&self, products: Vec<ShoppingProductProjection>) {
        self.record(ViewEvent::ProductsReplaced { products }).await;
    }

    async fn products_appended(&self, products: Vec<ShoppingProductProjection>) {
        self.record(ViewEvent::ProductsAppended { products }).await;
    }

    async fn line_item_quantity_changed(&self, product: Product, quantity: u32) {
        self.record(ViewEvent::LineItemQuantityChanged { product, quantity })
            .await;
    }

    async fn cart_count_changed(&self, count: u32) {
        self.record(ViewEvent::CartCountChanged { count }).await;
    }

    async fn recency_changed(&self, history: Vec<RecentlyViewedEntry>) {
        self.record(ViewEvent::RecencyChanged { history }).await;
    }

    async fn detail_requested(&self, product: Product, previous: Option<Product>) {
        self.record(ViewEvent::DetailRequested { product, previous })
            .await;
    }

    async fn add_completed(&self, product: Product) {
        self.record(ViewEvent::AddCompleted { product }).await;
    }

    async fn cart_changed(&self, line_items: Vec<CartLineItem>) {
        self.record(ViewEvent::CartChanged { line_items }).await;
    }

    async fn cart_navigation_changed(&self, navigation: CartNavigation) {
        self.record(ViewEvent::CartNavigationChanged { navigation })
            .await;
    }

    async fn all_checked_changed(&self, is_all_checked: bool) {
        self.record(ViewEvent::AllCheckedChanged { is_all_checked })
            .await;
    }

    async fn checked_quantity_changed(&self, quantity: u32) {
        self.record(ViewEvent::CheckedQuantityChanged { quantity })
            .await;
    }

    async fn order_requested(&self, line_item_ids: Vec<LineItemId>) {
        self.record(ViewEvent::OrderRequested { line_item_ids })
            .await;
    }

    async fn load_failed(&self) {
        self.record(ViewEvent::LoadFailed).await;
    }

    async fn action_failed(&self, message: String) {
        self.record(ViewEvent::ActionFailed { message }).await;
    }
}

#[cfg(test)]
mod recording_view_tests {
    use super::*;
    use crate::tests::fixtures::products::make_product;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_record_notifications_in_order() {
        let view = RecordingView::new();
        view.cart_count_changed(2).await;
        view.load_failed().await;
        assert_eq!(
            view.events().await,
            vec![ViewEvent::CartCountChanged { count: 2 }, ViewEvent::LoadFailed]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drain_on_take() {
        let view = RecordingView::new();
        view.add_completed(make_product(1)).await;
        assert_eq!(view.take().await.len(), 1);
        assert!(view.events().await.is_empty());
    }

    #[rstest]
    fn it_should_serialize_with_a_type_tag() {
        let json = serde_json::to_value(ViewEvent::CartCountChanged { count: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "cart_count_changed", "count": 3 }));
        let json = serde_json::to_value(ViewEvent::LoadFailed).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "load_failed" }));
        let json = serde_json::to_value(ViewEvent::OrderRequested {
            line_item_ids: vec![1, 3],
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "order_requested", "line_item_ids": [1, 3] })
        );
    }
}
