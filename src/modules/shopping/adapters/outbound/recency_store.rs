use crate::modules::shopping::core::product::ProductId;
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::shared::infrastructure::store_error::StoreError;
use async_trait::async_trait;

/// Local persistence for the recently viewed history, one entry per product.
#[async_trait]
pub trait RecencyStore: Send + Sync {
    /// Every stored entry, newest first.
    async fn get_all(&self) -> Result<Vec<RecentlyViewedEntry>, StoreError>;

    async fn exists(&self, product_id: ProductId) -> bool;

    async fn insert(&self, entry: RecentlyViewedEntry) -> Result<(), StoreError>;

    /// Replace the entry of the same product.
    async fn update(&self, entry: RecentlyViewedEntry) -> Result<(), StoreError>;

    async fn delete(&self, product_id: ProductId) -> Result<(), StoreError>;
}
