use crate::get_conn;
use crate::pages::{layout, unavailable};
use crate::store;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;

pub async fn recipe_list(State(pool): State<AppState>) -> Response {
    let mut conn = get_conn!(pool, unavailable());

    let recipes = match store::all_recipes(&mut conn) {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            return unavailable();
        }
    };

    let markup = layout::page(
        "Recipes",
        false,
        html! {
            h1 { "Recipes" }
            @if recipes.is_empty() {
                p { "No recipes yet." }
            } @else {
                div class="recipe-grid" {
                    @for recipe in &recipes {
                        a class="recipe-card" href=(format!("/recipes/{}/", recipe.id)) {
                            img src=(layout::media_url(&recipe.image)) alt=(recipe.name);
                            div {
                                h3 { (recipe.name) }
                                p { (recipe.cooking_time) " min · " (recipe.difficulty) }
                            }
                        }
                    }
                }
            }
        },
    );
    (StatusCode::OK, Html(markup.into_string())).into_response()
}
