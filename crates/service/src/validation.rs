//! Explicit payload validation.
//!
//! Input DTOs deserialize every field as `Option<_>`; the helpers here turn
//! them into checked values before any store is touched.

use thiserror::Error;

/// Enumerated reasons a payload or identifier was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field required: {field}")]
    MissingField { field: &'static str },
    #[error("field must not be empty: {field}")]
    EmptyField { field: &'static str },
    #[error("field must not be null: {field}")]
    NullField { field: &'static str },
    #[error("invalid {resource} id: {value:?}")]
    InvalidId { resource: &'static str, value: String },
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// A field that must be present and non-null.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

/// Present and at least one character long. Whitespace counts as content.
pub fn required_non_empty(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = required(value, field)?;
    non_empty(&value, field)?;
    Ok(value)
}

pub fn non_empty(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Optional field where absence means "use the default" but an explicit
/// `null` is rejected. Pair with [`present`] on the DTO field.
pub fn optional_non_null<T>(value: Option<Option<T>>, field: &'static str) -> Result<Option<T>, ValidationError> {
    match value {
        None => Ok(None),
        Some(None) => Err(ValidationError::NullField { field }),
        Some(Some(v)) => Ok(Some(v)),
    }
}

/// Serde helper keeping an explicit `null` apart from an absent field:
/// absent stays `None` through `#[serde(default)]`, `null` becomes `Some(None)`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}
