use crate::pages::layout;
use axum::response::Html;
use maud::html;

pub async fn home() -> Html<String> {
    let markup = layout::page(
        "Home",
        true,
        html! {
            section class="hero" {
                h1 { "Recipe Box" }
                p { "Collect recipes, see how hard they are at a glance, and find the right one for tonight." }
                p {
                    a href="/recipes/" { "Browse recipes" }
                    " "
                    a href="/recipes/search/" { "Search" }
                }
            }
        },
    );
    Html(markup.into_string())
}
