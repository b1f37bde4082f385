use crate::api::{store_error, ErrorResponse};
use crate::get_conn;
use crate::models::Recipe;
use crate::store;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDateTime;
use recipebox_core::RecipeFields;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub name: String,
    pub short_description: Option<String>,
    /// Ingredients as stored (comma-separated)
    pub ingredients: String,
    /// Ingredients split into trimmed, non-empty entries
    pub ingredient_list: Vec<String>,
    /// Cooking time in minutes
    pub cooking_time: i32,
    /// Easy, Medium, Intermediate or Hard; derived on save
    pub difficulty: String,
    pub likes: i32,
    pub comments: Option<String>,
    pub reference_url: Option<String>,
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            ingredient_list: recipe.ingredient_list(),
            id: recipe.id,
            name: recipe.name,
            short_description: recipe.short_description,
            ingredients: recipe.ingredients,
            cooking_time: recipe.cooking_time,
            difficulty: recipe.difficulty,
            likes: recipe.likes,
            comments: recipe.comments,
            reference_url: recipe.reference_url,
            image: recipe.image,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(pool): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::get_recipe(&mut conn, id) {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => store_error(e, "fetch recipe"),
    }
}
