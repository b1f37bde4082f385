//! The search form and its result report.

use crate::get_conn;
use crate::models::Recipe;
use crate::pages::{layout, unavailable};
use crate::store;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use maud::{html, Markup};
use recipebox_core::{
    build_report, Chart, ChartType, Difficulty, Report, SearchInput, ValidationErrors,
};
use serde::Deserialize;

const DEFAULT_CHART: &str = "#1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAction {
    Search,
    ShowAll,
}

/// Search form fields as posted (or given as a query string).
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub cooking_time_max: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub action: Option<SearchAction>,
}

impl SearchForm {
    fn input(&self) -> SearchInput {
        SearchInput {
            recipe_name: self.recipe_name.clone(),
            ingredients: self.ingredients.clone(),
            cooking_time_max: self.cooking_time_max.clone(),
            difficulty: self.difficulty.clone(),
            chart_type: self.chart_type.clone(),
        }
    }
}

enum Outcome {
    /// Nothing submitted yet
    Empty,
    Invalid(ValidationErrors),
    Results { recipes: Vec<Recipe>, report: Report },
}

pub async fn search_page(State(pool): State<AppState>, Query(form): Query<SearchForm>) -> Response {
    run(pool, form)
}

pub async fn search_submit(State(pool): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    run(pool, form)
}

fn run(pool: AppState, form: SearchForm) -> Response {
    let Some(action) = form.action else {
        return render(&form, &Outcome::Empty, StatusCode::OK);
    };

    let input = form.input();
    let chart_selection = input.chart_selection().unwrap_or(DEFAULT_CHART);

    let filter = match action {
        SearchAction::ShowAll => None,
        SearchAction::Search => {
            let criteria = match input.criteria() {
                Ok(criteria) => criteria,
                Err(errors) => {
                    return render(&form, &Outcome::Invalid(errors), StatusCode::BAD_REQUEST)
                }
            };
            match criteria.to_filter() {
                Ok(filter) => Some(filter),
                Err(e) => {
                    tracing::warn!("Rejected search: {}", e);
                    let errors = e.to_validation_errors();
                    return render(&form, &Outcome::Invalid(errors), StatusCode::BAD_REQUEST);
                }
            }
        }
    };

    let mut conn = get_conn!(pool, unavailable());

    let recipes = match &filter {
        Some(filter) => store::search_recipes(&mut conn, filter),
        None => store::all_recipes(&mut conn),
    };
    let recipes = match recipes {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::error!("Failed to search recipes: {}", e);
            return unavailable();
        }
    };

    let report = build_report(&recipes, Some(chart_selection));
    render(&form, &Outcome::Results { recipes, report }, StatusCode::OK)
}

fn render(form: &SearchForm, outcome: &Outcome, status: StatusCode) -> Response {
    let errors = match outcome {
        Outcome::Invalid(errors) => Some(errors),
        _ => None,
    };

    let markup = layout::page(
        "Search",
        false,
        html! {
            h1 { "Search recipes" }
            (search_form(form, errors))
            @match outcome {
                Outcome::Empty | Outcome::Invalid(_) => {}
                Outcome::Results { recipes, report } => {
                    (results(recipes, report))
                }
            }
        },
    );
    (status, Html(markup.into_string())).into_response()
}

fn field_errors(errors: Option<&ValidationErrors>, field: &str) -> Markup {
    let messages = errors.map(|e| e.for_field(field)).unwrap_or_default();
    html! {
        @if !messages.is_empty() {
            ul class="errors" {
                @for message in messages {
                    li { (message) }
                }
            }
        }
    }
}

fn search_form(form: &SearchForm, errors: Option<&ValidationErrors>) -> Markup {
    let value = |v: &Option<String>| v.clone().unwrap_or_default();
    let chart = form
        .chart_type
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CHART.to_string());
    let difficulty = value(&form.difficulty);

    html! {
        form method="post" action="/recipes/search/" {
            div class="field" {
                label for="recipe_name" { "Recipe name" }
                input type="text" id="recipe_name" name="recipe_name" maxlength="120"
                    placeholder="Enter recipe name (* and ? wildcards supported)"
                    value=(value(&form.recipe_name));
                (field_errors(errors, "recipe_name"))
            }
            div class="field" {
                label for="ingredients" { "Ingredients" }
                input type="text" id="ingredients" name="ingredients" maxlength="200"
                    placeholder="Enter ingredients (comma separated)"
                    value=(value(&form.ingredients));
                (field_errors(errors, "ingredients"))
            }
            div class="field" {
                label for="cooking_time_max" { "Max cooking time (minutes)" }
                input type="number" id="cooking_time_max" name="cooking_time_max"
                    min="1" max="1440" value=(value(&form.cooking_time_max));
                (field_errors(errors, "cooking_time_max"))
            }
            div class="field" {
                label for="difficulty" { "Difficulty" }
                select id="difficulty" name="difficulty" {
                    option value="" selected[difficulty.is_empty()] { "All Difficulties" }
                    @for d in Difficulty::ALL {
                        option value=(d.as_str()) selected[difficulty == d.as_str()] { (d.as_str()) }
                    }
                }
                (field_errors(errors, "difficulty"))
            }
            div class="field" {
                label for="chart_type" { "Chart" }
                select id="chart_type" name="chart_type" {
                    @for c in ChartType::ALL {
                        option value=(c.form_value()) selected[chart == c.form_value()] { (c.label()) }
                    }
                    option value="all" selected[chart == "all"] { "All charts" }
                }
            }
            button type="submit" name="action" value="search" { "Search" }
            " "
            button type="submit" name="action" value="show_all" { "Show all" }
        }
    }
}

fn results(recipes: &[Recipe], report: &Report) -> Markup {
    html! {
        @for notice in &report.notices {
            p class="notice" { (notice) }
        }
        @if report.table.is_empty() {
            p { "No recipes match your search." }
        } @else {
            p { (recipes.len()) " recipe(s) found." }
            table {
                thead {
                    tr {
                        @for column in report.table.columns {
                            th { (column) }
                        }
                    }
                }
                tbody {
                    @for row in &report.table.rows {
                        tr {
                            td { a href=(format!("/recipes/{}/", row.id)) { (row.name) } }
                            td { (row.cooking_time) " min" }
                            td { (row.difficulty.as_str()) }
                            td { (row.ingredients.join(", ")) }
                        }
                    }
                }
            }
            @for chart in &report.charts {
                (chart_figure(chart))
            }
        }
    }
}

fn chart_figure(chart: &Chart) -> Markup {
    html! {
        figure class="chart" {
            figcaption { h2 { (chart.title) } }
            img src=(chart.data_url()) alt=(chart.title);
            @if let Some(x_label) = &chart.x_label {
                p {
                    "x: " (x_label)
                    @if let Some(x_max) = chart.x_max { " (0 to " (x_max) ")" }
                }
            }
            @if let Some(y_label) = &chart.y_label {
                p {
                    "y: " (y_label)
                    @if let Some(y_max) = chart.y_max { " (0 to " (y_max) ")" }
                }
            }
            ul class="legend" {
                @for entry in &chart.legend {
                    li {
                        span class="swatch" style=(format!("background: {}", entry.color)) {}
                        (entry.label) ": " (entry.value)
                    }
                }
            }
        }
    }
}
