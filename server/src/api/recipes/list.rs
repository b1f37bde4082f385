use crate::api::recipes::get::RecipeResponse;
use crate::api::{store_error, ErrorResponse};
use crate::get_conn;
use crate::store;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Number of items to return (default: 20, max: 1000)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

impl ListRecipesParams {
    /// Clamped `(limit, offset)`.
    fn bounds(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = self.offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMetadata {
    /// Total number of items available
    pub total: i64,
    /// Number of items requested (limit)
    pub limit: i64,
    /// Number of items skipped (offset)
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeResponse>,
    pub pagination: PaginationMetadata,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Recipes in id order", body = ListRecipesResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let (limit, offset) = params.bounds();
    let mut conn = get_conn!(pool);

    let total = match store::count_recipes(&mut conn) {
        Ok(total) => total,
        Err(e) => return store_error(e, "fetch recipes"),
    };

    let recipes = match store::list_recipes(&mut conn, limit, offset) {
        Ok(recipes) => recipes,
        Err(e) => return store_error(e, "fetch recipes"),
    };

    (
        StatusCode::OK,
        Json(ListRecipesResponse {
            recipes: recipes.into_iter().map(RecipeResponse::from).collect(),
            pagination: PaginationMetadata {
                total,
                limit,
                offset,
            },
        }),
    )
        .into_response()
}
