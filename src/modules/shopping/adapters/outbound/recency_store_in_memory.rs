// In memory implementation of the RecencyStore port.
//
// Purpose
// - Stand in for the local recently viewed table.
//
// Ordering
// - get_all returns newest first. Equal timestamps fall back to write order, latest write first.

use crate::modules::shopping::adapters::outbound::recency_store::RecencyStore;
use crate::modules::shopping::core::product::ProductId;
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::shared::infrastructure::store_error::StoreError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

const RESOURCE: &str = "recently viewed product";

#[derive(Default)]
struct RecencyRows {
    entries: HashMap<ProductId, (u64, RecentlyViewedEntry)>,
    next_seq: u64,
}

impl RecencyRows {
    fn write(&mut self, entry: RecentlyViewedEntry) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(entry.product.id, (seq, entry));
    }
}

#[derive(Default)]
pub struct InMemoryRecencyStore {
    rows: RwLock<RecencyRows>,
    is_offline: AtomicBool,
    is_write_offline: AtomicBool,
}

impl InMemoryRecencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Fail writes only. Reads keep working.
    pub fn toggle_write_offline(&self) {
        self.is_write_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("Recency store offline".into()));
        }
        Ok(())
    }

    fn ensure_writable(&self) -> Result<(), StoreError> {
        self.ensure_online()?;
        if self.is_write_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("Recency store read-only".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecencyStore for InMemoryRecencyStore {
    async fn get_all(&self) -> Result<Vec<RecentlyViewedEntry>, StoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut rows: Vec<&(u64, RecentlyViewedEntry)> = guard.entries.values().collect();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            b.viewed_at.cmp(&a.viewed_at).then(seq_b.cmp(seq_a))
        });
        Ok(rows.into_iter().map(|(_, entry)| entry.clone()).collect())
    }

    async fn exists(&self, product_id: ProductId) -> bool {
        if self.ensure_online().is_err() {
            return false;
        }
        self.rows.read().await.entries.contains_key(&product_id)
    }

    async fn insert(&self, entry: RecentlyViewedEntry) -> Result<(), StoreError> {
        self.ensure_writable()?;
        self.rows.write().await.write(entry);
        Ok(())
    }

    async fn update(&self, entry: RecentlyViewedEntry) -> Result<(), StoreError> {
        self.ensure_writable()?;
        let mut guard = self.rows.write().await;
        if !guard.entries.contains_key(&entry.product.id) {
            return Err(StoreError::NotFound {
                resource: RESOURCE,
                id: entry.product.id,
            });
        }
        guard.write(entry);
        Ok(())
    }

    async fn delete(&self, product_id: ProductId) -> Result<(), StoreError> {
        self.ensure_writable()?;
        self.rows.write().await.entries.remove(&product_id);
        Ok(())
    }
}
