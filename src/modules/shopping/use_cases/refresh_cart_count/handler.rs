use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::use_cases::errors::Settlement;
use tracing::{debug, warn};

/// Side-query issued after every successful cart mutation.
/// A failure is swallowed: the mutation stands and the displayed count stays stale.
pub async fn refresh_cart_count(cart: &impl CartStore, view: &dyn ShoppingView) -> Settlement<u32> {
    match cart.count_all().await {
        Ok(count) => {
            debug!(count, "cart count refreshed");
            view.cart_count_changed(count).await;
            Settlement::Applied(count)
        }
        Err(error) => {
            warn!(%error, "cart count refresh failed, keeping the displayed count");
            Settlement::Swallowed(error.into())
        }
    }
}
