// In memory implementation of the CatalogStore port.
//
// Purpose
// - Serve a fixed catalog for tests and for the binary without a product service.

use crate::modules::shopping::adapters::outbound::catalog_store::CatalogStore;
use crate::modules::shopping::core::product::{Product, ProductId};
use crate::shared::infrastructure::store_error::StoreError;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalogStore {
    products: RwLock<Vec<Product>>,
    is_offline: AtomicBool,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("Catalog store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Product>, StoreError> {
        self.ensure_online()?;
        let guard = self.products.read().await;
        if offset >= guard.len() {
            return Ok(Vec::new());
        }
        let end = offset.saturating_add(limit).min(guard.len());
        Ok(guard[offset..end].to_vec())
    }

    async fn find_product(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|product| product.id == product_id)
            .cloned())
    }
}
