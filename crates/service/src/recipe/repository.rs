use async_trait::async_trait;

use super::domain::{Recipe, RecipeId, RecipeInput, RecipePatch};
use crate::errors::ServiceError;

/// Storage abstraction for recipes.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn create(&self, input: RecipeInput) -> Result<Recipe, ServiceError>;
    async fn list(&self) -> Vec<Recipe>;
    async fn get(&self, id: RecipeId) -> Result<Recipe, ServiceError>;
    async fn update(&self, id: RecipeId, patch: RecipePatch) -> Result<Recipe, ServiceError>;
    async fn delete(&self, id: RecipeId) -> Result<(), ServiceError>;
    async fn search(&self, query: &str) -> Vec<Recipe>;
    /// Drop every recipe and restart ids at 1. Intended for test isolation.
    async fn clear(&self);
}
