use axum::{extract::State, Json};
use common::types::Message;
use service::todo::{TodoInput, TodoItem};
use tracing::info;

use crate::errors::JsonApiError;
use crate::extractors::{ApiJson, TodoIdPath};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/todos/", tag = "todos",
    request_body = crate::openapi::TodoInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::TodoItemDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create_todo(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<TodoInput>,
) -> Result<Json<TodoItem>, JsonApiError> {
    let item = state.todos.create(input).await?;
    Ok(Json(item))
}

#[utoipa::path(
    get, path = "/todos/", tag = "todos",
    responses((status = 200, description = "OK", body = [crate::openapi::TodoItemDoc]))
)]
pub async fn list_todos(State(state): State<ServerState>) -> Json<Vec<TodoItem>> {
    let items = state.todos.list().await;
    info!(count = items.len(), "list todos");
    Json(items)
}

#[utoipa::path(
    get, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo UUID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TodoItemDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Malformed id")
    )
)]
pub async fn get_todo(
    State(state): State<ServerState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<TodoItem>, JsonApiError> {
    Ok(Json(state.todos.get(id).await?))
}

#[utoipa::path(
    put, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo UUID")),
    request_body = crate::openapi::TodoInputDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::TodoItemDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update_todo(
    State(state): State<ServerState>,
    TodoIdPath(id): TodoIdPath,
    ApiJson(input): ApiJson<TodoInput>,
) -> Result<Json<TodoItem>, JsonApiError> {
    Ok(Json(state.todos.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/todos/{id}", tag = "todos",
    params(("id" = String, Path, description = "Todo UUID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_todo(
    State(state): State<ServerState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<Message>, JsonApiError> {
    state.todos.delete(id).await?;
    Ok(Json(Message::new("Todo deleted successfully")))
}
