use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::recipe::{Recipe, RecipeInput, RecipePatch};
use tracing::info;

use crate::errors::JsonApiError;
use crate::extractors::{ApiJson, RecipeIdPath};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/recipes", tag = "recipes",
    request_body = crate::openapi::RecipeInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RecipeDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create_recipe(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<RecipeInput>,
) -> Result<(StatusCode, Json<Recipe>), JsonApiError> {
    let recipe = state.recipes.create(input).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    get, path = "/recipes", tag = "recipes",
    responses((status = 200, description = "OK", body = [crate::openapi::RecipeDoc]))
)]
pub async fn list_recipes(State(state): State<ServerState>) -> Json<Vec<Recipe>> {
    let recipes = state.recipes.list().await;
    info!(count = recipes.len(), "list recipes");
    Json(recipes)
}

#[utoipa::path(
    get, path = "/recipes/{id}", tag = "recipes",
    params(("id" = u64, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RecipeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_recipe(
    State(state): State<ServerState>,
    RecipeIdPath(id): RecipeIdPath,
) -> Result<Json<Recipe>, JsonApiError> {
    Ok(Json(state.recipes.get(id).await?))
}

#[utoipa::path(
    put, path = "/recipes/{id}", tag = "recipes",
    params(("id" = u64, Path, description = "Recipe id")),
    request_body = crate::openapi::RecipePatchDoc,
    responses(
        (status = 200, description = "Merged", body = crate::openapi::RecipeDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update_recipe(
    State(state): State<ServerState>,
    RecipeIdPath(id): RecipeIdPath,
    ApiJson(patch): ApiJson<RecipePatch>,
) -> Result<Json<Recipe>, JsonApiError> {
    Ok(Json(state.recipes.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/recipes/{id}", tag = "recipes",
    params(("id" = u64, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_recipe(
    State(state): State<ServerState>,
    RecipeIdPath(id): RecipeIdPath,
) -> Result<StatusCode, JsonApiError> {
    state.recipes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/recipes/search/{query}", tag = "recipes",
    params(("query" = String, Path, description = "Case-insensitive name fragment")),
    responses((status = 200, description = "Matches", body = [crate::openapi::RecipeDoc]))
)]
pub async fn search_recipes(
    State(state): State<ServerState>,
    Path(query): Path<String>,
) -> Json<Vec<Recipe>> {
    Json(state.recipes.search(&query).await)
}
