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
use recipebox_core::{build_report, Chart, ChartType, LegendEntry, SearchInput};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Name term; `*` matches any run of characters, `?` exactly one
    pub recipe_name: Option<String>,
    /// Comma-separated ingredient terms, all of which must match
    pub ingredients: Option<String>,
    /// Maximum cooking time in minutes (1-1440)
    pub cooking_time_max: Option<String>,
    /// Easy, Medium, Intermediate or Hard
    pub difficulty: Option<String>,
    /// Chart selector: #1 (bar), #2 (pie), #3 (line) or all. Omit for no charts.
    pub chart_type: Option<String>,
}

impl From<SearchParams> for SearchInput {
    fn from(params: SearchParams) -> Self {
        SearchInput {
            recipe_name: params.recipe_name,
            ingredients: params.ingredients,
            cooking_time_max: params.cooking_time_max,
            difficulty: params.difficulty,
            chart_type: params.chart_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegendEntryResponse {
    pub label: String,
    pub value: String,
    /// `#rrggbb`
    pub color: String,
}

impl From<LegendEntry> for LegendEntryResponse {
    fn from(entry: LegendEntry) -> Self {
        Self {
            label: entry.label,
            value: entry.value,
            color: entry.color,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartResponse {
    /// bar, pie or line
    pub chart_type: String,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_max: Option<i64>,
    pub y_max: Option<i64>,
    pub legend: Vec<LegendEntryResponse>,
    /// PNG image as a `data:` URL
    pub image: String,
}

impl From<Chart> for ChartResponse {
    fn from(chart: Chart) -> Self {
        let image = chart.data_url();
        let chart_type = match chart.chart_type {
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Line => "line",
        };
        Self {
            chart_type: chart_type.to_string(),
            title: chart.title,
            x_label: chart.x_label,
            y_label: chart.y_label,
            x_max: chart.x_max,
            y_max: chart.y_max,
            legend: chart.legend.into_iter().map(Into::into).collect(),
            image,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    pub recipes: Vec<RecipeResponse>,
    pub charts: Vec<ChartResponse>,
    /// Non-fatal problems, e.g. an unknown chart type
    pub notices: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes and charts", body = SearchResponse),
        (status = 400, description = "Invalid search parameters", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(pool): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let input = SearchInput::from(params);

    let criteria = match input.criteria() {
        Ok(criteria) => criteria,
        Err(errors) => return ErrorResponse::validation(&errors),
    };

    let filter = match criteria.to_filter() {
        Ok(filter) => filter,
        Err(e) => {
            tracing::warn!("Rejected search: {}", e);
            return ErrorResponse::validation(&e.to_validation_errors());
        }
    };

    let mut conn = get_conn!(pool);

    let recipes = match store::search_recipes(&mut conn, &filter) {
        Ok(recipes) => recipes,
        Err(e) => return store_error(e, "search recipes"),
    };

    let report = build_report(&recipes, input.chart_selection());

    (
        StatusCode::OK,
        Json(SearchResponse {
            recipes: recipes.into_iter().map(RecipeResponse::from).collect(),
            charts: report.charts.into_iter().map(Into::into).collect(),
            notices: report.notices,
        }),
    )
        .into_response()
}
