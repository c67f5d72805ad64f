//! Todo items: UUID-keyed, replaced wholesale on update.

pub mod domain;
pub mod repository;
pub mod store;

pub use domain::{TodoInput, TodoItem};
pub use repository::TodoRepository;
pub use store::TodoStore;
