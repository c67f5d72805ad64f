use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::domain::{merge, name_matches, Recipe, RecipeId, RecipeInput, RecipePatch};
use super::repository::RecipeRepository;
use crate::errors::ServiceError;

const RESOURCE: &str = "Recipe";
const FIRST_ID: RecipeId = 1;

/// Recipes in insertion order plus the next id to hand out. Both live behind
/// one lock so id assignment and insertion are a single step.
struct RecipeState {
    recipes: IndexMap<RecipeId, Recipe>,
    next_id: RecipeId,
}

impl Default for RecipeState {
    fn default() -> Self {
        Self { recipes: IndexMap::new(), next_id: FIRST_ID }
    }
}

/// In-memory recipe store with a monotonic id counter: the nth recipe created
/// gets id n and ids freed by deletes are never handed out again.
#[derive(Clone, Default)]
pub struct RecipeStore {
    inner: Arc<RwLock<RecipeState>>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, input: RecipeInput) -> Result<Recipe, ServiceError> {
        let valid = input.validate()?;
        let recipe = {
            let mut state = self.inner.write().await;
            let id = state.next_id;
            state.next_id += 1;
            let recipe = valid.into_recipe(id, Utc::now());
            state.recipes.insert(id, recipe.clone());
            recipe
        };
        info!(id = recipe.id, name = %recipe.name, "recipe created");
        Ok(recipe)
    }

    /// All recipes, in insertion order.
    pub async fn list(&self) -> Vec<Recipe> {
        self.inner.read().await.recipes.values().cloned().collect()
    }

    pub async fn get(&self, id: RecipeId) -> Result<Recipe, ServiceError> {
        self.inner
            .read()
            .await
            .recipes
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(RESOURCE, id))
    }

    /// Merge the present fields of `patch`; `updated_at` always moves.
    pub async fn update(&self, id: RecipeId, patch: RecipePatch) -> Result<Recipe, ServiceError> {
        patch.validate()?;
        let fields_changed = !patch.is_empty();
        let updated = {
            let mut state = self.inner.write().await;
            let stored = state.recipes.get_mut(&id).ok_or_else(|| ServiceError::not_found(RESOURCE, id))?;
            *stored = merge(stored.clone(), patch, Utc::now());
            stored.clone()
        };
        info!(id, fields_changed, "recipe updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: RecipeId) -> Result<(), ServiceError> {
        // shift_remove keeps the remaining recipes in insertion order
        match self.inner.write().await.recipes.shift_remove(&id) {
            Some(_) => {
                info!(id, "recipe deleted");
                Ok(())
            }
            None => Err(ServiceError::not_found(RESOURCE, id)),
        }
    }

    pub async fn search(&self, query: &str) -> Vec<Recipe> {
        let needle = query.to_lowercase();
        let found: Vec<Recipe> = self
            .inner
            .read()
            .await
            .recipes
            .values()
            .filter(|r| name_matches(r, &needle))
            .cloned()
            .collect();
        debug!(query, hits = found.len(), "recipe search");
        found
    }

    /// Drop every recipe and restart ids at 1.
    pub async fn clear(&self) {
        *self.inner.write().await = RecipeState::default();
        debug!("recipe store cleared");
    }
}

#[async_trait]
impl RecipeRepository for RecipeStore {
    async fn create(&self, input: RecipeInput) -> Result<Recipe, ServiceError> { self.create(input).await }
    async fn list(&self) -> Vec<Recipe> { self.list().await }
    async fn get(&self, id: RecipeId) -> Result<Recipe, ServiceError> { self.get(id).await }
    async fn update(&self, id: RecipeId, patch: RecipePatch) -> Result<Recipe, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: RecipeId) -> Result<(), ServiceError> { self.delete(id).await }
    async fn search(&self, query: &str) -> Vec<Recipe> { self.search(query).await }
    async fn clear(&self) { self.clear().await }
}
