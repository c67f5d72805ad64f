use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct TodoInputDoc {
    pub title: String,
    pub description: String,
    pub completed: Option<bool>,
}

#[derive(ToSchema)]
pub struct TodoItemDoc {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[derive(ToSchema)]
pub struct RecipeInputDoc {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

#[derive(ToSchema)]
pub struct RecipePatchDoc {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
}

#[derive(ToSchema)]
pub struct RecipeDoc {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp, refreshed on every update
    pub updated_at: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Kitchen API", description = "Todo items and recipes kept in process memory"),
    paths(
        crate::routes::health,
        crate::routes::todos::create_todo,
        crate::routes::todos::list_todos,
        crate::routes::todos::get_todo,
        crate::routes::todos::update_todo,
        crate::routes::todos::delete_todo,
        crate::routes::recipes::create_recipe,
        crate::routes::recipes::list_recipes,
        crate::routes::recipes::get_recipe,
        crate::routes::recipes::update_recipe,
        crate::routes::recipes::delete_recipe,
        crate::routes::recipes::search_recipes,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            TodoInputDoc,
            TodoItemDoc,
            RecipeInputDoc,
            RecipePatchDoc,
            RecipeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todos"),
        (name = "recipes"),
    )
)]
pub struct ApiDoc;
