//! Server-rendered HTML pages.

pub mod detail;
pub mod home;
pub mod layout;
pub mod list;
pub mod search;

use crate::AppState;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use maud::html;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/recipes/", get(list::recipe_list))
        .route(
            "/recipes/search/",
            get(search::search_page).post(search::search_submit),
        )
        .route("/recipes/{id}/", get(detail::recipe_detail))
}

/// Render a plain error page with `status`.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let title = status.canonical_reason().unwrap_or("Error");
    let markup = layout::page(
        title,
        false,
        html! {
            h1 { (status.as_u16()) " " (title) }
            p { (message) }
            p { a href="/recipes/" { "Back to all recipes" } }
        },
    );
    (status, Html(markup.into_string())).into_response()
}

pub fn not_found_page() -> Response {
    error_page(StatusCode::NOT_FOUND, "The page you requested does not exist.")
}

/// Router fallback for unmatched paths.
pub async fn not_found() -> Response {
    not_found_page()
}

/// Pool checkout failure, rendered as an HTML 500 for use with `get_conn!`.
pub(crate) fn unavailable() -> Response {
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "The recipe database is unavailable. Please try again later.",
    )
}
