// Per-key async locks.
//
// Purpose
// - Serialize read-then-write sequences that target the same key (for example one product's
//   cart line item) while leaving different keys fully independent.
//
// Notes
// - A lock is created on first use and kept for the lifetime of the map.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub struct KeyedLocks<K> {
    locks: Mutex<HashMap<K, Arc<Mutex<()>>>>,
}

impl<K> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone + Send,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, key: &K) -> OwnedMutexGuard<()> {
        let lock = {
            let mut guard = self.locks.lock().await;
            guard.entry(key.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
