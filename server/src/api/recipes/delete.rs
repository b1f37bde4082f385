use crate::api::{store_error, ErrorResponse};
use crate::get_conn;
use crate::store;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted successfully"),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(State(pool): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::delete_recipe(&mut conn, id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error(e, "delete recipe"),
    }
}
