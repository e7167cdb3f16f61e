use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::cart_line_item::CartLineItem;
use crate::modules::shopping::core::product::ProductId;
use crate::modules::shopping::use_cases::add_to_cart::command::AddToCart;
use crate::modules::shopping::use_cases::add_to_cart::decision::{Decision, decide_add};
use crate::modules::shopping::use_cases::errors::{ApplicationError, CartMutation};
use crate::modules::shopping::use_cases::refresh_cart_count::handler::refresh_cart_count;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct AddToCartHandler<TCart>
where
    TCart: CartStore + Send + Sync + 'static,
{
    cart: Arc<TCart>,
    locks: Arc<KeyedLocks<ProductId>>,
}

impl<TCart> AddToCartHandler<TCart>
where
    TCart: CartStore + Send + Sync + 'static,
{
    pub fn new(cart: Arc<TCart>, locks: Arc<KeyedLocks<ProductId>>) -> Self {
        Self { cart, locks }
    }

    /// Upsert the product's line item with the merged quantity.
    ///
    /// Nothing is shown before the store confirms. A rejected command never reaches the store;
    /// a store failure is reported to the view as a failed action. The count refresh that
    /// follows a stored line item is swallowed on failure and carried in the result.
    pub async fn handle(
        &self,
        view: &dyn ShoppingView,
        command: AddToCart,
    ) -> Result<CartMutation<CartLineItem>, ApplicationError> {
        match self.upsert(&command).await {
            Ok(line_item) => {
                view.add_completed(command.product.clone()).await;
                view.line_item_quantity_changed(command.product, line_item.quantity)
                    .await;
                let count = refresh_cart_count(&*self.cart, view).await;
                Ok(CartMutation::refreshed(line_item, count))
            }
            Err(error @ ApplicationError::Rejected(_)) => Err(error),
            Err(error) => {
                warn!(product_id = command.product.id, %error, "add to cart failed");
                view.action_failed(error.to_string()).await;
                Err(error)
            }
        }
    }

    async fn upsert(&self, command: &AddToCart) -> Result<CartLineItem, ApplicationError> {
        let _guard = self.locks.acquire(&command.product.id).await;
        let existing = self.cart.find_line_item(command.product.id).await?;
        debug!(product_id = command.product.id, merged = existing.is_some(), "line item read");

        match decide_add(existing.as_ref(), command) {
            Decision::Accepted { line_item } if line_item.is_persisted() => {
                match self.cart.patch_quantity(line_item.id, line_item.quantity).await {
                    Ok(()) => Ok(line_item),
                    // Removed since the read: start over with the requested quantity.
                    Err(error) if error.is_not_found() => Ok(self
                        .cart
                        .create_line_item(&command.product, command.quantity)
                        .await?),
                    Err(error) => Err(error.into()),
                }
            }
            Decision::Accepted { line_item } => Ok(self
                .cart
                .create_line_item(&line_item.product, line_item.quantity)
                .await?),
            Decision::Rejected { reason } => Err(ApplicationError::Rejected(reason.to_string())),
        }
    }
}
