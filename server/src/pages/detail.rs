use crate::get_conn;
use crate::pages::{layout, not_found_page, unavailable};
use crate::store::{self, StoreError};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use maud::html;
use recipebox_core::RecipeFields;

/// `id` is taken as a string so a non-numeric path renders the 404 page
/// rather than a plain-text rejection.
pub async fn recipe_detail(State(pool): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i32>() else {
        return not_found_page();
    };

    let mut conn = get_conn!(pool, unavailable());

    let recipe = match store::get_recipe(&mut conn, id) {
        Ok(recipe) => recipe,
        Err(StoreError::NotFound) => return not_found_page(),
        Err(e) => {
            tracing::error!("Failed to fetch recipe {}: {}", id, e);
            return unavailable();
        }
    };

    let markup = layout::page(
        &recipe.name,
        false,
        html! {
            article class="recipe-detail" {
                img src=(layout::media_url(&recipe.image)) alt=(recipe.name);
                h1 { (recipe.name) }
                @if let Some(description) = &recipe.short_description {
                    p { (description) }
                }
                table {
                    tr { th { "Cooking time" } td { (recipe.cooking_time) " minutes" } }
                    tr { th { "Difficulty" } td { (recipe.difficulty) } }
                    tr { th { "Likes" } td { (recipe.likes) } }
                }
                h2 { "Ingredients" }
                ul {
                    @for ingredient in recipe.ingredient_list() {
                        li { (ingredient) }
                    }
                }
                @if let Some(url) = &recipe.reference_url {
                    p { a href=(url) rel="noopener" { "Original recipe" } }
                }
                @if let Some(comments) = &recipe.comments {
                    h2 { "Comments" }
                    p { (comments) }
                }
            }
            p { a href="/recipes/" { "Back to all recipes" } }
        },
    );
    Html(markup.into_string()).into_response()
}
