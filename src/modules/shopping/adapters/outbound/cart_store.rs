use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::product::{Product, ProductId};
use crate::shared::infrastructure::store_error::StoreError;
use async_trait::async_trait;

/// Remote cart, addressed by product identity for reads and by line item identity for writes.
///
/// The store is eventually consistent and offers no atomic read-modify-write, so callers read
/// the current line item before computing the next one.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn find_line_item(&self, product_id: ProductId) -> Result<Option<CartLineItem>, StoreError>;

    async fn list_line_items(&self) -> Result<Vec<CartLineItem>, StoreError>;

    async fn create_line_item(&self, product: &Product, quantity: u32) -> Result<CartLineItem, StoreError>;

    async fn patch_quantity(&self, line_item_id: LineItemId, quantity: u32) -> Result<(), StoreError>;

    async fn patch_checked(&self, line_item_id: LineItemId, is_checked: bool) -> Result<(), StoreError>;

    async fn delete_line_item(&self, line_item_id: LineItemId) -> Result<(), StoreError>;

    /// Number of distinct line items in the cart.
    async fn count_all(&self) -> Result<u32, StoreError>;
}
