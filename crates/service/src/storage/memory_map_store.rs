use std::{hash::Hash, sync::Arc};

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Generic in-memory key-value map store.
///
/// Keeps entries in insertion order so listings come back in the order they
/// were added. Every mutation happens under a single write lock.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<IndexMap<K, V>>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(IndexMap::new())) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// List all values in insertion order.
    pub async fn list(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Remove a key, preserving the relative order of the remaining entries.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().await;
        map.shift_remove(key)
    }

    /// Apply a mutation to the underlying map while holding the write lock.
    pub async fn update_map<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut IndexMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.inner.write().await;
        f(&mut map)
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }
}
