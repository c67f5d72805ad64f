use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{TodoInput, TodoItem};
use crate::errors::ServiceError;

/// Storage abstraction for todo items.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn create(&self, input: TodoInput) -> Result<TodoItem, ServiceError>;
    async fn list(&self) -> Vec<TodoItem>;
    async fn get(&self, id: Uuid) -> Result<TodoItem, ServiceError>;
    async fn update(&self, id: Uuid, input: TodoInput) -> Result<TodoItem, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    /// Drop every item. Intended for test isolation.
    async fn clear(&self);
}
