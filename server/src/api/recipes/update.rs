use crate::api::recipes::create::RecipeRequest;
use crate::api::recipes::get::RecipeResponse;
use crate::api::{store_error, ErrorResponse};
use crate::get_conn;
use crate::store;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(pool): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<RecipeRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::update_recipe(&mut conn, id, &request.into()) {
        Ok(recipe) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Err(e) => store_error(e, "update recipe"),
    }
}
