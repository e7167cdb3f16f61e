// ReconciliationOrchestrator: the single entry point the view's intents go through.
//
// Responsibilities
// - Wire the use case handlers to one set of stores and one per-product lock table.
// - Own the process-local state: the catalog window (inside LoadCatalogHandler), the cart page
//   (inside EditCartHandler) and the recency capacity.
//
// Boundaries
// - Every intent takes the view it should notify. The orchestrator keeps no view reference, so
//   one instance serves any number of views.

use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::catalog_store::CatalogStore;
use crate::modules::shopping::adapters::outbound::recency_store::RecencyStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::product::{Product, ProductId};
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::modules::shopping::use_cases::add_to_cart::command::AddToCart;
use crate::modules::shopping::use_cases::add_to_cart::handler::AddToCartHandler;
use crate::modules::shopping::use_cases::change_quantity::handler::{
    ChangeQuantityHandler, QuantityOutcome,
};
use crate::modules::shopping::use_cases::edit_cart::handler::{CartPage, EditCartHandler};
use crate::modules::shopping::use_cases::errors::{ApplicationError, CartMutation, Settlement};
use crate::modules::shopping::use_cases::load_catalog::handler::{CatalogPage, LoadCatalogHandler};
use crate::modules::shopping::use_cases::open_product::handler::{OpenProductHandler, OpenedProduct};
use crate::modules::shopping::use_cases::refresh_cart_count::handler::refresh_cart_count;
use crate::modules::shopping::use_cases::show_recent_products::handler::ShowRecentProductsHandler;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorSettings {
    pub page_size: usize,
    pub recent_capacity: usize,
    pub cart_page_size: usize,
}

pub struct ReconciliationOrchestrator<TCatalog, TCart, TRecency>
where
    TCatalog: CatalogStore + Send + Sync + 'static,
    TCart: CartStore + Send + Sync + 'static,
    TRecency: RecencyStore + Send + Sync + 'static,
{
    catalog: Arc<TCatalog>,
    cart: Arc<TCart>,
    load_catalog: LoadCatalogHandler<TCatalog, TCart>,
    quantities: Arc<ChangeQuantityHandler<TCart>>,
    add_to_cart: AddToCartHandler<TCart>,
    edit_cart: EditCartHandler<TCart>,
    open_product: OpenProductHandler<TRecency>,
    show_recent: ShowRecentProductsHandler<TRecency>,
}

impl<TCatalog, TCart, TRecency> ReconciliationOrchestrator<TCatalog, TCart, TRecency>
where
    TCatalog: CatalogStore + Send + Sync + 'static,
    TCart: CartStore + Send + Sync + 'static,
    TRecency: RecencyStore + Send + Sync + 'static,
{
    pub fn new(
        catalog: Arc<TCatalog>,
        cart: Arc<TCart>,
        recency: Arc<TRecency>,
        settings: OrchestratorSettings,
    ) -> Self {
        let locks = Arc::new(KeyedLocks::new());
        let quantities = Arc::new(ChangeQuantityHandler::new(cart.clone(), locks.clone()));
        Self {
            load_catalog: LoadCatalogHandler::new(catalog.clone(), cart.clone(), settings.page_size),
            add_to_cart: AddToCartHandler::new(cart.clone(), locks.clone()),
            edit_cart: EditCartHandler::new(
                cart.clone(),
                quantities.clone(),
                locks,
                settings.cart_page_size,
            ),
            open_product: OpenProductHandler::new(recency.clone(), settings.recent_capacity),
            show_recent: ShowRecentProductsHandler::new(recency, settings.recent_capacity),
            quantities,
            catalog,
            cart,
        }
    }

    pub async fn load_initial(&self, view: &dyn ShoppingView) -> Result<CatalogPage, ApplicationError> {
        self.load_catalog.load_initial(view).await
    }

    pub async fn load_more(&self, view: &dyn ShoppingView) -> Result<CatalogPage, ApplicationError> {
        self.load_catalog.load_more(view).await
    }

    pub async fn reload(&self, view: &dyn ShoppingView) -> Result<CatalogPage, ApplicationError> {
        self.load_catalog.reload(view).await
    }

    pub async fn loaded_count(&self) -> usize {
        self.load_catalog.loaded_count().await
    }

    pub async fn increase(
        &self,
        view: &dyn ShoppingView,
        product: &Product,
    ) -> Settlement<CartMutation<QuantityOutcome>> {
        self.quantities.increase(view, product).await
    }

    pub async fn decrease(
        &self,
        view: &dyn ShoppingView,
        product: &Product,
    ) -> Settlement<CartMutation<QuantityOutcome>> {
        self.quantities.decrease(view, product).await
    }

    pub async fn add_to_cart(
        &self,
        view: &dyn ShoppingView,
        command: AddToCart,
    ) -> Result<CartMutation<CartLineItem>, ApplicationError> {
        self.add_to_cart.handle(view, command).await
    }

    /// `now` is epoch milliseconds, supplied by the caller.
    pub async fn open_product(
        &self,
        view: &dyn ShoppingView,
        product: &Product,
        now: i64,
    ) -> Result<OpenedProduct, ApplicationError> {
        self.open_product.handle(view, product, now).await
    }

    pub async fn refresh_recency(
        &self,
        view: &dyn ShoppingView,
    ) -> Result<Vec<RecentlyViewedEntry>, ApplicationError> {
        self.show_recent.handle(view).await
    }

    pub async fn refresh_cart_count(&self, view: &dyn ShoppingView) -> Settlement<u32> {
        refresh_cart_count(&*self.cart, view).await
    }

    pub async fn show_cart(&self, view: &dyn ShoppingView) -> Result<CartPage, ApplicationError> {
        self.edit_cart.show(view).await
    }

    pub async fn next_cart_page(&self, view: &dyn ShoppingView) -> Result<CartPage, ApplicationError> {
        self.edit_cart.next_page(view).await
    }

    pub async fn previous_cart_page(&self, view: &dyn ShoppingView) -> Result<CartPage, ApplicationError> {
        self.edit_cart.previous_page(view).await
    }

    pub async fn increase_line_item(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
    ) -> Result<CartMutation<QuantityOutcome>, ApplicationError> {
        self.edit_cart.increase(view, line_item).await
    }

    pub async fn decrease_line_item(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
    ) -> Result<CartMutation<QuantityOutcome>, ApplicationError> {
        self.edit_cart.decrease(view, line_item).await
    }

    pub async fn remove_line_item(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
    ) -> Result<CartMutation<()>, ApplicationError> {
        self.edit_cart.remove(view, line_item).await
    }

    pub async fn set_checked(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
        is_checked: bool,
    ) -> Result<CartMutation<()>, ApplicationError> {
        self.edit_cart.set_checked(view, line_item, is_checked).await
    }

    pub async fn set_all_checked(
        &self,
        view: &dyn ShoppingView,
        is_checked: bool,
    ) -> Result<CartMutation<()>, ApplicationError> {
        self.edit_cart.set_all_checked(view, is_checked).await
    }

    /// The checked line item ids handed to ordering.
    pub async fn order(&self, view: &dyn ShoppingView) -> Result<Vec<LineItemId>, ApplicationError> {
        self.edit_cart.order(view).await
    }

    pub async fn find_product(&self, product_id: ProductId) -> Result<Option<Product>, ApplicationError> {
        Ok(self.catalog.find_product(product_id).await?)
    }

    /// The cart line item of a product, for inbound adapters that only carry the product id.
    pub async fn find_line_item(
        &self,
        product_id: ProductId,
    ) -> Result<Option<CartLineItem>, ApplicationError> {
        Ok(self.cart.find_line_item(product_id).await?)
    }
}
