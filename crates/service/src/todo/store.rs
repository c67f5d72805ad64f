use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use super::domain::{TodoInput, TodoItem};
use super::repository::TodoRepository;
use crate::errors::ServiceError;
use crate::storage::memory_map_store::MemoryMapStore;

const RESOURCE: &str = "Todo";

/// In-memory todo store keyed by random UUIDs.
#[derive(Clone, Default)]
pub struct TodoStore {
    store: MemoryMapStore<Uuid, TodoItem>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, assign a fresh id and store.
    pub async fn create(&self, input: TodoInput) -> Result<TodoItem, ServiceError> {
        let valid = input.validate()?;
        let item = self
            .store
            .update_map(|map| {
                // never hand out a live id twice
                let mut id = Uuid::new_v4();
                while map.contains_key(&id) {
                    id = Uuid::new_v4();
                }
                let item = valid.into_item(id);
                map.insert(id, item.clone());
                Ok(item)
            })
            .await?;
        info!(id = %item.id, "todo created");
        Ok(item)
    }

    /// All items, in insertion order.
    pub async fn list(&self) -> Vec<TodoItem> {
        self.store.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<TodoItem, ServiceError> {
        self.store
            .get(&id)
            .await
            .ok_or_else(|| ServiceError::not_found(RESOURCE, id))
    }

    /// Replace every field except the id.
    pub async fn update(&self, id: Uuid, input: TodoInput) -> Result<TodoItem, ServiceError> {
        let valid = input.validate()?;
        let updated = self
            .store
            .update_map(|map| {
                let existing = map.get_mut(&id).ok_or_else(|| ServiceError::not_found(RESOURCE, id))?;
                *existing = valid.into_item(id);
                Ok(existing.clone())
            })
            .await?;
        info!(id = %id, completed = updated.completed, "todo replaced");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        match self.store.remove(&id).await {
            Some(_) => {
                info!(id = %id, "todo deleted");
                Ok(())
            }
            None => Err(ServiceError::not_found(RESOURCE, id)),
        }
    }

    pub async fn clear(&self) {
        self.store.clear().await;
        debug!("todo store cleared");
    }
}

#[async_trait]
impl TodoRepository for TodoStore {
    async fn create(&self, input: TodoInput) -> Result<TodoItem, ServiceError> { self.create(input).await }
    async fn list(&self) -> Vec<TodoItem> { self.list().await }
    async fn get(&self, id: Uuid) -> Result<TodoItem, ServiceError> { self.get(id).await }
    async fn update(&self, id: Uuid, input: TodoInput) -> Result<TodoItem, ServiceError> { self.update(id, input).await }
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> { self.delete(id).await }
    async fn clear(&self) { self.clear().await }
}
