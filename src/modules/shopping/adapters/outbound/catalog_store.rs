use crate::modules::shopping::core::product::{Product, ProductId};
use crate::shared::infrastructure::store_error::StoreError;
use async_trait::async_trait;

/// Paginated product catalog, addressed by offset and limit.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// At most `limit` products starting at `offset`, in catalog order.
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Product>, StoreError>;

    async fn find_product(&self, product_id: ProductId) -> Result<Option<Product>, StoreError>;
}
