//! Custom axum extractors that turn path and body rejections into 422s.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use service::recipe::domain::{parse_recipe_id, RecipeId};
use service::todo::domain::parse_todo_id;
use service::{ServiceError, ValidationError};
use uuid::Uuid;

use crate::errors::JsonApiError;

/// JSON body whose rejection (bad syntax, wrong field types, wrong
/// content type) is reported as a validation error.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed(rejection.body_text())),
        }
    }
}

/// Todo id from the `{id}` path segment.
pub struct TodoIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_path_segment(parts, state).await?;
        let id = parse_todo_id(&raw).map_err(ServiceError::from)?;
        Ok(Self(id))
    }
}

/// Recipe id from the `{id}` path segment.
pub struct RecipeIdPath(pub RecipeId);

#[async_trait]
impl<S> FromRequestParts<S> for RecipeIdPath
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_path_segment(parts, state).await?;
        let id = parse_recipe_id(&raw).map_err(ServiceError::from)?;
        Ok(Self(id))
    }
}

async fn raw_path_segment<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<String, JsonApiError> {
    let Path(raw): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|e| malformed(e.body_text()))?;
    Ok(raw)
}

fn malformed(detail: String) -> JsonApiError {
    ServiceError::from(ValidationError::Malformed(detail)).into()
}
