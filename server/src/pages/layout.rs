use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; color: #1f2933; background: #fafaf7; }
main { max-width: 960px; margin: 0 auto; padding: 24px 16px 96px; }
nav { display: flex; gap: 20px; align-items: center; padding: 14px 24px; }
nav a { color: inherit; text-decoration: none; font-weight: bold; }
nav .brand { margin-right: auto; font-size: 20px; }
footer { padding: 12px 24px; font-size: 14px; }
table { border-collapse: collapse; width: 100%; margin: 16px 0; }
th, td { text-align: left; padding: 8px; border-bottom: 1px solid #ddd; vertical-align: top; }
.nav-hero { position: fixed; top: 0; left: 0; right: 0; z-index: 50; background: rgba(35, 31, 32, 0.7); color: #f4d9a8; }
.nav-default { background: #f3efe6; border-bottom: 1px solid #e5e7eb; color: #5c3d1e; }
.footer-hero { position: fixed; left: 0; right: 0; bottom: 0; z-index: 50; background: rgba(35, 31, 32, 0.7); color: #f4d9a8; }
.footer-default { background: #f3efe6; border-top: 1px solid #e5e7eb; color: #5c3d1e; }
.hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; background: linear-gradient(135deg, #5c3d1e, #c0843d); color: white; }
.hero h1 { font-size: 56px; margin: 0 0 12px; }
.hero a { color: white; border: 2px solid white; border-radius: 8px; padding: 10px 18px; text-decoration: none; }
.recipe-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; }
.recipe-card { background: white; border-radius: 8px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.08); overflow: hidden; }
.recipe-card img, .recipe-detail img { width: 100%; max-height: 320px; object-fit: cover; }
.recipe-card div { padding: 12px; }
.field { margin-bottom: 12px; }
.field label { display: block; font-weight: bold; margin-bottom: 4px; }
.errors { color: #b42318; margin: 4px 0; padding-left: 18px; }
.notice { background: #fff4e5; border: 1px solid #f5c27a; padding: 8px 12px; border-radius: 6px; }
.chart { margin: 24px 0; }
.chart img { max-width: 100%; border: 1px solid #ddd; }
.legend span.swatch { display: inline-block; width: 12px; height: 12px; margin-right: 6px; }
"#;

/// Home is the only hero page: transparent fixed nav and footer over a full-height banner.
pub fn nav_classes(hero: bool) -> &'static str {
    if hero {
        "nav-hero"
    } else {
        "nav-default"
    }
}

pub fn footer_classes(hero: bool) -> &'static str {
    if hero {
        "footer-hero"
    } else {
        "footer-default"
    }
}

/// Wrap `content` in the site chrome.
pub fn page(title: &str, hero: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Recipe Box" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav class=(nav_classes(hero)) {
                    a class="brand" href="/" { "Recipe Box" }
                    a href="/recipes/" { "Recipes" }
                    a href="/recipes/search/" { "Search" }
                }
                @if hero {
                    (content)
                } @else {
                    main { (content) }
                }
                footer class=(footer_classes(hero)) {
                    "Recipe Box"
                }
            }
        }
    }
}

/// URL of a recipe image stored under the media directory.
pub fn media_url(image: &str) -> String {
    format!("/media/{}", image.trim_start_matches('/'))
}
