// Increase or decrease one product's cart quantity from a list view.
//
// Flow
// - Hold the product's lock, read the current line item, propose, write. The lock spans the
//   whole read-then-write so concurrent taps on the same product cannot lose an update.
// - Increase on an absent product creates a line item with quantity 1.
// - Decrease applies the list floor: 1 -> 0 deletes the line item.
//
// Failures
// - increase/decrease swallow store failures: the displayed quantity stays as it was and the
//   Settlement says why. apply() surfaces them for callers that report errors.
// - The count refresh after a write is swallowed on its own. The result carries its Settlement.

use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::cart_reconciler::{
    LIST_FLOOR, QuantityProposal, propose_decrease, propose_increase,
};
use crate::modules::shopping::core::product::{Product, ProductId};
use crate::modules::shopping::use_cases::errors::{ApplicationError, CartMutation, Settlement};
use crate::modules::shopping::use_cases::refresh_cart_count::handler::refresh_cart_count;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    Changed(u32),
    Removed,
    /// Nothing to change: the product was not in the cart, or its line item vanished.
    Untouched,
}

impl QuantityOutcome {
    /// Quantity the view should show, 0 after a removal. `None` when nothing was written.
    pub fn displayed_quantity(&self) -> Option<u32> {
        match self {
            QuantityOutcome::Changed(quantity) => Some(*quantity),
            QuantityOutcome::Removed => Some(0),
            QuantityOutcome::Untouched => None,
        }
    }
}

pub struct ChangeQuantityHandler<TCart>
where
    TCart: CartStore + Send + Sync + 'static,
{
    cart: Arc<TCart>,
    locks: Arc<KeyedLocks<ProductId>>,
}

impl<TCart> ChangeQuantityHandler<TCart>
where
    TCart: CartStore + Send + Sync + 'static,
{
    pub fn new(cart: Arc<TCart>, locks: Arc<KeyedLocks<ProductId>>) -> Self {
        Self { cart, locks }
    }

    pub async fn increase(
        &self,
        view: &dyn ShoppingView,
        product: &Product,
    ) -> Settlement<CartMutation<QuantityOutcome>> {
        self.settle(view, product, QuantityChange::Increase).await
    }

    pub async fn decrease(
        &self,
        view: &dyn ShoppingView,
        product: &Product,
    ) -> Settlement<CartMutation<QuantityOutcome>> {
        self.settle(view, product, QuantityChange::Decrease).await
    }

    /// Read-propose-write under the product's lock. Does not notify the view.
    pub async fn apply(
        &self,
        product: &Product,
        change: QuantityChange,
    ) -> Result<QuantityOutcome, ApplicationError> {
        let _guard = self.locks.acquire(&product.id).await;
        let current = self.cart.find_line_item(product.id).await?;
        debug!(product_id = product.id, ?change, found = current.is_some(), "line item read");

        let Some(current) = current else {
            return match change {
                QuantityChange::Increase => {
                    let created = self.cart.create_line_item(product, 1).await?;
                    Ok(QuantityOutcome::Changed(created.quantity))
                }
                QuantityChange::Decrease => Ok(QuantityOutcome::Untouched),
            };
        };

        let proposal = match change {
            QuantityChange::Increase => QuantityProposal::Patch(propose_increase(&current)),
            QuantityChange::Decrease => propose_decrease(&current, LIST_FLOOR),
        };

        match proposal {
            QuantityProposal::Patch(next) => {
                match self.cart.patch_quantity(next.id, next.quantity).await {
                    Ok(()) => Ok(QuantityOutcome::Changed(next.quantity)),
                    Err(error) if error.is_not_found() => Ok(QuantityOutcome::Untouched),
                    Err(error) => Err(error.into()),
                }
            }
            QuantityProposal::Removal(removed) => {
                match self.cart.delete_line_item(removed.id).await {
                    Ok(()) => Ok(QuantityOutcome::Removed),
                    Err(error) if error.is_not_found() => Ok(QuantityOutcome::Removed),
                    Err(error) => Err(error.into()),
                }
            }
            QuantityProposal::Unchanged(_) => Ok(QuantityOutcome::Untouched),
        }
    }

    async fn settle(
        &self,
        view: &dyn ShoppingView,
        product: &Product,
        change: QuantityChange,
    ) -> Settlement<CartMutation<QuantityOutcome>> {
        match self.apply(product, change).await {
            Ok(outcome) => match outcome.displayed_quantity() {
                Some(quantity) => {
                    view.line_item_quantity_changed(product.clone(), quantity).await;
                    let count = refresh_cart_count(&*self.cart, view).await;
                    Settlement::Applied(CartMutation::refreshed(outcome, count))
                }
                None => Settlement::Applied(CartMutation::unrefreshed(outcome)),
            },
            Err(error) => {
                warn!(product_id = product.id, ?change, %error, "quantity change failed, display unchanged");
                Settlement::Swallowed(error)
            }
        }
    }
}
