use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{optional_non_null, present, required, required_non_empty, ValidationError};

/// Stored todo. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Create/replace payload as received. A client-supplied `id` is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TodoInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` when absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub completed: Option<Option<bool>>,
}

/// A payload that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidTodo {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>, completed: bool) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            completed: Some(Some(completed)),
        }
    }

    /// `title` and `description` are required, `title` must not be empty,
    /// `completed` defaults to false when absent and may not be `null`.
    pub fn validate(self) -> Result<ValidTodo, ValidationError> {
        let title = required_non_empty(self.title, "title")?;
        let description = required(self.description, "description")?;
        let completed = optional_non_null(self.completed, "completed")?.unwrap_or(false);
        Ok(ValidTodo { title, description, completed })
    }
}

impl ValidTodo {
    pub fn into_item(self, id: Uuid) -> TodoItem {
        TodoItem { id, title: self.title, description: self.description, completed: self.completed }
    }
}

/// Parse a path segment into a todo id.
pub fn parse_todo_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidId {
        resource: "todo",
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_defaults_to_false() {
        let input: TodoInput =
            serde_json::from_str(r#"{"title":"Test todo","description":"Test description"}"#).unwrap();
        let valid = input.validate().unwrap();
        assert!(!valid.completed);
    }

    #[test]
    fn client_id_is_ignored_on_deserialize() {
        let input: TodoInput = serde_json::from_str(
            r#"{"id":"123e4567-e89b-12d3-a456-426614174000","title":"t","description":"d","completed":true}"#,
        )
        .unwrap();
        assert_eq!(input, TodoInput::new("t", "d", true));
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let input: TodoInput = serde_json::from_str(r#"{"wrong_field":"Test todo"}"#).unwrap();
        assert_eq!(input.validate(), Err(ValidationError::MissingField { field: "title" }));

        let input: TodoInput = serde_json::from_str(r#"{"title":"t","description":null}"#).unwrap();
        assert_eq!(input.validate(), Err(ValidationError::MissingField { field: "description" }));
    }

    #[test]
    fn empty_title_rejected_but_whitespace_title_and_empty_description_allowed() {
        assert_eq!(
            TodoInput::new("", "d", false).validate(),
            Err(ValidationError::EmptyField { field: "title" })
        );
        assert_eq!(TodoInput::new("   ", "d", false).validate().unwrap().title, "   ");
        assert!(TodoInput::new("t", "", false).validate().is_ok());
    }

    #[test]
    fn null_completed_is_rejected() {
        let input: TodoInput =
            serde_json::from_str(r#"{"title":"t","description":"d","completed":null}"#).unwrap();
        assert_eq!(input.completed, Some(None));
        assert_eq!(input.validate(), Err(ValidationError::NullField { field: "completed" }));
    }

    #[test]
    fn wrong_type_fails_deserialization() {
        assert!(serde_json::from_str::<TodoInput>(r#"{"title":1,"description":"d"}"#).is_err());
    }

    #[test]
    fn parse_todo_id_accepts_uuid_and_rejects_garbage() {
        let id = parse_todo_id("123e4567-e89b-12d3-a456-426614174000").unwrap();
        assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
        assert!(matches!(
            parse_todo_id("not-a-uuid"),
            Err(ValidationError::InvalidId { resource: "todo", .. })
        ));
    }
}
