use std::sync::Arc;

use service::recipe::{RecipeRepository, RecipeStore};
use service::todo::{TodoRepository, TodoStore};

/// Shared handler state: one store per resource collection.
#[derive(Clone)]
pub struct ServerState {
    pub todos: Arc<dyn TodoRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
}

impl ServerState {
    pub fn new(todos: Arc<dyn TodoRepository>, recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { todos, recipes }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(TodoStore::new()), Arc::new(RecipeStore::new()))
    }

    /// Empty both stores; recipe ids restart at 1.
    pub async fn reset(&self) {
        self.todos.clear().await;
        self.recipes.clear().await;
    }
}
