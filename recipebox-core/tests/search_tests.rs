//! Search behaviour over a small in-memory catalogue.
//!
//! Records go through `prepare_recipe` first, the same way the store saves them,
//! so these tests exercise validation, difficulty derivation and filtering together.

use recipebox_core::{
    build_report, prepare_recipe, Difficulty, PreparedRecipe, RecipeFields, RecipeInput,
    SearchCriteria,
};

struct Saved {
    id: i32,
    recipe: PreparedRecipe,
}

impl RecipeFields for Saved {
    fn id(&self) -> i32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.recipe.name
    }
    fn ingredients(&self) -> &str {
        &self.recipe.ingredients
    }
    fn cooking_time(&self) -> i32 {
        self.recipe.cooking_time
    }
}

fn catalogue() -> Vec<Saved> {
    let inputs = [
        ("Pasta al Pesto", "pasta, basil, pine nuts, parmesan cheese, oil", 15),
        ("Tomato Soup", "tomato, onion, stock", 30),
        ("Caprese", "tomato, mozzarella cheese, basil", 5),
        ("Pastas Primavera", "pasta, zucchini, peas", 20),
        ("Cheese Toast", "bread, cheese", 5),
        ("Pizza Margherita", "dough, tomato, cheese, basil", 12),
    ];

    inputs
        .iter()
        .enumerate()
        .map(|(i, (name, ingredients, cooking_time))| Saved {
            id: i as i32 + 1,
            recipe: prepare_recipe(&RecipeInput {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
                cooking_time: *cooking_time,
                ..Default::default()
            })
            .expect("fixture recipes are valid"),
        })
        .collect()
}

fn search(criteria: SearchCriteria) -> Vec<String> {
    let filter = criteria.to_filter().unwrap();
    catalogue()
        .iter()
        .filter(|r| filter.matches(*r))
        .map(|r| r.recipe.name.clone())
        .collect()
}

#[test]
fn test_ingredient_terms_are_anded() {
    let found = search(SearchCriteria {
        ingredients: Some("tomato, cheese".to_string()),
        ..Default::default()
    });
    assert_eq!(found, vec!["Caprese", "Pizza Margherita"]);
}

#[test]
fn test_blank_ingredient_terms_are_ignored() {
    let found = search(SearchCriteria {
        ingredients: Some("tomato, ,  ,".to_string()),
        ..Default::default()
    });
    assert_eq!(found, vec!["Tomato Soup", "Caprese", "Pizza Margherita"]);
}

#[test]
fn test_plain_name_is_substring() {
    let found = search(SearchCriteria {
        recipe_name: Some("pasta".to_string()),
        ..Default::default()
    });
    assert_eq!(found, vec!["Pasta al Pesto", "Pastas Primavera"]);
}

#[test]
fn test_wildcard_name() {
    let found = search(SearchCriteria {
        recipe_name: Some("pasta?".to_string()),
        ..Default::default()
    });
    assert_eq!(found, vec!["Pastas Primavera"]);

    let found = search(SearchCriteria {
        recipe_name: Some("*soup".to_string()),
        ..Default::default()
    });
    assert_eq!(found, vec!["Tomato Soup"]);
}

#[test]
fn test_wildcard_ingredient() {
    let found = search(SearchCriteria {
        ingredients: Some("moz*, bas?l".to_string()),
        ..Default::default()
    });
    assert_eq!(found, vec!["Caprese"]);
}

#[test]
fn test_cooking_time_and_difficulty() {
    let found = search(SearchCriteria {
        cooking_time_max: Some(12),
        ..Default::default()
    });
    assert_eq!(found, vec!["Caprese", "Cheese Toast", "Pizza Margherita"]);

    let found = search(SearchCriteria {
        difficulty: Some(Difficulty::Hard),
        ..Default::default()
    });
    assert_eq!(found, vec!["Pasta al Pesto", "Pizza Margherita"]);
}

#[test]
fn test_empty_criteria_match_everything() {
    assert_eq!(search(SearchCriteria::default()).len(), catalogue().len());
}

#[test]
fn test_saved_difficulty_matches_inputs() {
    let stew = prepare_recipe(&RecipeInput {
        name: "Stew".to_string(),
        ingredients: "a,b,c,d".to_string(),
        cooking_time: 25,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(stew.difficulty, Difficulty::Hard);
}

#[test]
fn test_report_over_search_results() {
    let filter = SearchCriteria {
        ingredients: Some("cheese".to_string()),
        ..Default::default()
    }
    .to_filter()
    .unwrap();
    let matches: Vec<Saved> = catalogue()
        .into_iter()
        .filter(|r| filter.matches(r))
        .collect();

    let report = build_report(&matches, Some("all"));
    assert_eq!(report.table.rows.len(), 4);
    assert_eq!(report.charts.len(), 3);
    assert!(report.notices.is_empty());
}
