//! Recipes: sequential integer ids, partial merge on update, name search.

pub mod domain;
pub mod repository;
pub mod store;

pub use domain::{merge, Recipe, RecipeInput, RecipePatch};
pub use repository::RecipeRepository;
pub use store::RecipeStore;
