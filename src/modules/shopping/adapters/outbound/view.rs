use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::cart_pager::CartNavigation;
use crate::modules::shopping::core::product::Product;
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::modules::shopping::core::shopping_product::ShoppingProductProjection;
use async_trait::async_trait;

/// The passive view. It only observes what the orchestrator reports and never calls a store.
///
/// Notifications are delivered on the task that awaited the store call, after the call settled.
#[async_trait]
pub trait ShoppingView: Send + Sync {
    /// The catalog window was loaded from offset 0 and replaces what is displayed.
    async fn products_replaced(&self, products: Vec<ShoppingProductProjection>);

    async fn products_appended(&self, products: Vec<ShoppingProductProjection>);

    /// Quantity 0 means the line item was removed.
    async fn line_item_quantity_changed(&self, product: Product, quantity: u32);

    async fn cart_count_changed(&self, count: u32);

    async fn recency_changed(&self, history: Vec<RecentlyViewedEntry>);

    async fn detail_requested(&self, product: Product, previous: Option<Product>);

    async fn add_completed(&self, product: Product);

    /// The line items of the current cart page.
    async fn cart_changed(&self, line_items: Vec<CartLineItem>);

    async fn cart_navigation_changed(&self, navigation: CartNavigation);

    async fn all_checked_changed(&self, is_all_checked: bool);

    /// Total quantity of the checked line items. Ordering is offered only above 0.
    async fn checked_quantity_changed(&self, quantity: u32);

    async fn order_requested(&self, line_item_ids: Vec<LineItemId>);

    async fn load_failed(&self);

    async fn action_failed(&self, message: String);
}
