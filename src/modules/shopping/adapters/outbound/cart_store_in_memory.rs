// In memory implementation of the CartStore port.
//
// Purpose
// - Support orchestrator tests and local development without the remote cart service.
//
// Responsibilities
// - Assign line item identifiers, starting at 1.
// - Keep line items in insertion order.
// - Behave like the remote service: no merge on create, NotFound on unknown identifiers.
//
// Test controls
// - toggle_offline makes every call fail with a transport failure.
// - toggle_count_offline makes only count_all fail.
// - set_delay_read_ms delays find_line_item to widen race windows.

use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::product::{Product, ProductId};
use crate::shared::infrastructure::store_error::StoreError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

const RESOURCE: &str = "cart line item";

struct CartRows {
    items: Vec<CartLineItem>,
    next_id: LineItemId,
}

impl Default for CartRows {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

#[derive(Default)]
pub struct InMemoryCartStore {
    rows: RwLock<CartRows>,
    is_offline: AtomicBool,
    is_count_offline: AtomicBool,
    read_delay_ms: AtomicU64,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn toggle_count_offline(&self) {
        self.is_count_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_read_ms(&self, ms: u64) {
        self.read_delay_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("Cart store offline".into()));
        }
        Ok(())
    }

    fn not_found(line_item_id: LineItemId) -> StoreError {
        StoreError::NotFound {
            resource: RESOURCE,
            id: line_item_id,
        }
    }
}

#[async_trait::async_trait]
impl CartStore for InMemoryCartStore {
    async fn find_line_item(&self, product_id: ProductId) -> Result<Option<CartLineItem>, StoreError> {
        self.ensure_online()?;
        let delay = self.read_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(self
            .rows
            .read()
            .await
            .items
            .iter()
            .find(|item| item.product_id() == product_id)
            .cloned())
    }

    async fn list_line_items(&self) -> Result<Vec<CartLineItem>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.items.clone())
    }

    async fn create_line_item(&self, product: &Product, quantity: u32) -> Result<CartLineItem, StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let line_item = CartLineItem {
            id: guard.next_id,
            quantity,
            is_checked: true,
            product: product.clone(),
        };
        guard.next_id += 1;
        guard.items.push(line_item.clone());
        Ok(line_item)
    }

    async fn patch_quantity(&self, line_item_id: LineItemId, quantity: u32) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let item = guard
            .items
            .iter_mut()
            .find(|item| item.id == line_item_id)
            .ok_or_else(|| Self::not_found(line_item_id))?;
        *item = item.with_quantity(quantity);
        Ok(())
    }

    async fn patch_checked(&self, line_item_id: LineItemId, is_checked: bool) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let item = guard
            .items
            .iter_mut()
            .find(|item| item.id == line_item_id)
            .ok_or_else(|| Self::not_found(line_item_id))?;
        *item = item.with_checked(is_checked);
        Ok(())
    }

    async fn delete_line_item(&self, line_item_id: LineItemId) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.items.len();
        guard.items.retain(|item| item.id != line_item_id);
        if guard.items.len() == before {
            return Err(Self::not_found(line_item_id));
        }
        Ok(())
    }

    async fn count_all(&self) -> Result<u32, StoreError> {
        self.ensure_online()?;
        if self.is_count_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("Cart count offline".into()));
        }
        Ok(self.rows.read().await.items.len() as u32)
    }
}
