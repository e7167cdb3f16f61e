// Cart screen editor: paged listing, quantity steps, removal, selection and ordering of line items.
//
// Responsibilities
// - Own the CartPager. The listing is fetched whole and cut into pages here, so the selection
//   summary (all checked, checked quantity) always covers the whole cart.
// - Quantity steps go through ChangeQuantityHandler so they share the per-product locks with
//   the catalog list. The list floor applies: 1 -> 0 removes the line item.
// - Removal and selection writes hold the product's lock as well.
// - After every successful edit, present the fresh page and refresh the aggregate count. The
//   count settlement travels back in the CartMutation.
//
// Failures
// - A line item that vanished in the meantime is nothing to patch or remove. Not escalated.
// - Transport failures are reported through action_failed and returned. The page stays where
//   it was.
// - Ordering with nothing checked is rejected without a notification.

use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::cart_pager::{CartNavigation, CartPager};
use crate::modules::shopping::core::cart_selection::{checked_ids, checked_quantity, is_all_checked};
use crate::modules::shopping::core::product::ProductId;
use crate::modules::shopping::use_cases::change_quantity::handler::{
    ChangeQuantityHandler, QuantityChange, QuantityOutcome,
};
use crate::modules::shopping::use_cases::errors::{ApplicationError, CartMutation, Settlement};
use crate::modules::shopping::use_cases::refresh_cart_count::handler::refresh_cart_count;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use crate::shared::infrastructure::store_error::StoreError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPage {
    pub line_items: Vec<CartLineItem>,
    pub navigation: CartNavigation,
    pub is_all_checked: bool,
    pub checked_quantity: u32,
}

pub struct EditCartHandler<TCart>
where
    TCart: CartStore + Send + Sync + 'static,
{
    cart: Arc<TCart>,
    quantities: Arc<ChangeQuantityHandler<TCart>>,
    locks: Arc<KeyedLocks<ProductId>>,
    pager: Mutex<CartPager>,
}

impl<TCart> EditCartHandler<TCart>
where
    TCart: CartStore + Send + Sync + 'static,
{
    pub fn new(
        cart: Arc<TCart>,
        quantities: Arc<ChangeQuantityHandler<TCart>>,
        locks: Arc<KeyedLocks<ProductId>>,
        page_size: usize,
    ) -> Self {
        Self {
            cart,
            quantities,
            locks,
            pager: Mutex::new(CartPager::new(page_size)),
        }
    }

    pub async fn show(&self, view: &dyn ShoppingView) -> Result<CartPage, ApplicationError> {
        let mut pager = self.pager.lock().await;
        match self.cart.list_line_items().await {
            Ok(line_items) => Ok(present(&mut pager, view, line_items).await),
            Err(error) => Err(self.report(view, "show cart", error.into()).await),
        }
    }

    /// Past the last page this only shows the current page again.
    pub async fn next_page(&self, view: &dyn ShoppingView) -> Result<CartPage, ApplicationError> {
        let mut pager = self.pager.lock().await;
        match self.cart.list_line_items().await {
            Ok(line_items) => {
                let moved = pager.next_page(line_items.len());
                debug!(moved, page = pager.page(), "cart next page");
                Ok(present(&mut pager, view, line_items).await)
            }
            Err(error) => Err(self.report(view, "next cart page", error.into()).await),
        }
    }

    pub async fn previous_page(&self, view: &dyn ShoppingView) -> Result<CartPage, ApplicationError> {
        let mut pager = self.pager.lock().await;
        match self.cart.list_line_items().await {
            Ok(line_items) => {
                let moved = pager.previous_page();
                debug!(moved, page = pager.page(), "cart previous page");
                Ok(present(&mut pager, view, line_items).await)
            }
            Err(error) => Err(self.report(view, "previous cart page", error.into()).await),
        }
    }

    pub async fn increase(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
    ) -> Result<CartMutation<QuantityOutcome>, ApplicationError> {
        let result = self
            .quantities
            .apply(&line_item.product, QuantityChange::Increase)
            .await;
        self.settle(view, "increase line item", result).await
    }

    pub async fn decrease(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
    ) -> Result<CartMutation<QuantityOutcome>, ApplicationError> {
        let result = self
            .quantities
            .apply(&line_item.product, QuantityChange::Decrease)
            .await;
        self.settle(view, "decrease line item", result).await
    }

    pub async fn remove(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
    ) -> Result<CartMutation<()>, ApplicationError> {
        let result = {
            let _guard = self.locks.acquire(&line_item.product_id()).await;
            absorb_not_found(self.cart.delete_line_item(line_item.id).await)
        };
        self.settle(view, "remove line item", result).await
    }

    pub async fn set_checked(
        &self,
        view: &dyn ShoppingView,
        line_item: &CartLineItem,
        is_checked: bool,
    ) -> Result<CartMutation<()>, ApplicationError> {
        let result = {
            let _guard = self.locks.acquire(&line_item.product_id()).await;
            absorb_not_found(self.cart.patch_checked(line_item.id, is_checked).await)
        };
        self.settle(view, "check line item", result).await
    }

    /// Apply one selection state to every line item. Items already in that state are skipped.
    pub async fn set_all_checked(
        &self,
        view: &dyn ShoppingView,
        is_checked: bool,
    ) -> Result<CartMutation<()>, ApplicationError> {
        let result = self.patch_all_checked(is_checked).await;
        self.settle(view, "check all line items", result).await
    }

    /// Hand the checked line items over to ordering.
    pub async fn order(&self, view: &dyn ShoppingView) -> Result<Vec<LineItemId>, ApplicationError> {
        let line_items = match self.cart.list_line_items().await {
            Ok(line_items) => line_items,
            Err(error) => return Err(self.report(view, "order", error.into()).await),
        };
        let ids = checked_ids(&line_items);
        if ids.is_empty() {
            debug!("order refused, nothing checked");
            return Err(ApplicationError::Rejected("no line item is checked".into()));
        }
        view.order_requested(ids.clone()).await;
        Ok(ids)
    }

    async fn patch_all_checked(&self, is_checked: bool) -> Result<(), ApplicationError> {
        let line_items = self.cart.list_line_items().await?;
        for line_item in line_items.iter().filter(|item| item.is_checked != is_checked) {
            let _guard = self.locks.acquire(&line_item.product_id()).await;
            absorb_not_found(self.cart.patch_checked(line_item.id, is_checked).await)?;
        }
        Ok(())
    }

    async fn settle<T>(
        &self,
        view: &dyn ShoppingView,
        action: &'static str,
        result: Result<T, ApplicationError>,
    ) -> Result<CartMutation<T>, ApplicationError> {
        match result {
            Ok(outcome) => {
                debug!(action, "cart edited");
                let count = self.publish(view).await;
                Ok(CartMutation::refreshed(outcome, count))
            }
            Err(error) => Err(self.report(view, action, error).await),
        }
    }

    async fn publish(&self, view: &dyn ShoppingView) -> Settlement<u32> {
        {
            let mut pager = self.pager.lock().await;
            match self.cart.list_line_items().await {
                Ok(line_items) => {
                    present(&mut pager, view, line_items).await;
                }
                Err(error) => warn!(%error, "cart listing after edit failed, keeping the displayed cart"),
            }
        }
        refresh_cart_count(&*self.cart, view).await
    }

    async fn report(
        &self,
        view: &dyn ShoppingView,
        action: &'static str,
        error: ApplicationError,
    ) -> ApplicationError {
        warn!(action, %error, "cart edit failed");
        view.action_failed(error.to_string()).await;
        error
    }
}

async fn present(
    pager: &mut CartPager,
    view: &dyn ShoppingView,
    line_items: Vec<CartLineItem>,
) -> CartPage {
    let navigation = pager.settle(line_items.len());
    let page = CartPage {
        line_items: pager.window(&line_items).to_vec(),
        navigation,
        is_all_checked: is_all_checked(&line_items),
        checked_quantity: checked_quantity(&line_items),
    };
    view.cart_changed(page.line_items.clone()).await;
    view.cart_navigation_changed(page.navigation).await;
    view.all_checked_changed(page.is_all_checked).await;
    view.checked_quantity_changed(page.checked_quantity).await;
    page
}

fn absorb_not_found(result: Result<(), StoreError>) -> Result<(), ApplicationError> {
    match result {
        Err(error) if error.is_not_found() => {
            debug!(%error, "line item already gone");
            Ok(())
        }
        other => other.map_err(ApplicationError::from),
    }
}
