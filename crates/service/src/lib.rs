//! Service layer: in-memory stores for todo items and recipes.
//! - Each store owns its collection and identifier policy.
//! - Payloads are validated explicitly before any mutation.
//! - Handlers depend on the repository traits, not the concrete stores.

pub mod errors;
pub mod validation;
pub mod storage;
pub mod todo;
pub mod recipe;

pub use errors::ServiceError;
pub use validation::ValidationError;
