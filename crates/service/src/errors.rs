use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    /// `NotFound` whose message names both the resource and the id.
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} with id {} not found", entity, id))
    }
}
