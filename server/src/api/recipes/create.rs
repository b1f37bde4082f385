use crate::api::{store_error, ErrorResponse};
use crate::api::recipes::get::RecipeResponse;
use crate::get_conn;
use crate::store;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recipebox_core::RecipeInput;
use serde::Deserialize;
use utoipa::ToSchema;

/// Editable recipe fields. Difficulty is derived on save and can't be set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecipeRequest {
    /// 1-120 characters, not blank
    pub name: String,
    /// Comma-separated, not blank
    pub ingredients: String,
    /// Minutes, 1-1440
    pub cooking_time: i64,
    /// Up to 300 characters
    pub short_description: Option<String>,
    /// Absolute http(s) URL
    pub reference_url: Option<String>,
    /// Image path under the media directory; defaults to a placeholder
    pub image: Option<String>,
}

impl From<RecipeRequest> for RecipeInput {
    fn from(request: RecipeRequest) -> Self {
        RecipeInput {
            name: request.name,
            ingredients: request.ingredients,
            cooking_time: request.cooking_time,
            short_description: request.short_description,
            reference_url: request.reference_url,
            image: request.image,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::create_recipe(&mut conn, &request.into()) {
        Ok(recipe) => (StatusCode::CREATED, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => store_error(e, "create recipe"),
    }
}
