//! Recipe persistence.
//!
//! Every write runs validate, then derive, then persist: input goes through
//! [`prepare_recipe`] and only the prepared record reaches the database, so the
//! stored difficulty can't disagree with the stored cooking time and ingredients.

use diesel::prelude::*;
use recipebox_core::{prepare_recipe, RecipeFilter, RecipeInput, ValidationErrors};
use thiserror::Error;

use crate::models::{NewRecipe, Recipe, RecipeChanges};
use crate::schema::recipes;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Recipe not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for StoreError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::NotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}

pub fn create_recipe(conn: &mut SqliteConnection, input: &RecipeInput) -> Result<Recipe, StoreError> {
    let prepared = prepare_recipe(input)?;

    let recipe = diesel::insert_into(recipes::table)
        .values(NewRecipe::from(&prepared))
        .returning(Recipe::as_returning())
        .get_result(conn)?;

    tracing::info!(id = recipe.id, difficulty = %recipe.difficulty, "created recipe");
    Ok(recipe)
}

/// Replace the editable fields of recipe `id` and recompute its difficulty.
pub fn update_recipe(
    conn: &mut SqliteConnection,
    id: i32,
    input: &RecipeInput,
) -> Result<Recipe, StoreError> {
    let prepared = prepare_recipe(input)?;
    let now = chrono::Utc::now().naive_utc();

    let recipe = diesel::update(recipes::table.find(id))
        .set(RecipeChanges::new(&prepared, now))
        .returning(Recipe::as_returning())
        .get_result(conn)?;

    tracing::info!(id = recipe.id, difficulty = %recipe.difficulty, "updated recipe");
    Ok(recipe)
}

pub fn get_recipe(conn: &mut SqliteConnection, id: i32) -> Result<Recipe, StoreError> {
    Ok(recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(conn)?)
}

pub fn list_recipes(
    conn: &mut SqliteConnection,
    limit: i64,
    offset: i64,
) -> Result<Vec<Recipe>, StoreError> {
    Ok(recipes::table
        .select(Recipe::as_select())
        .order(recipes::id.asc())
        .limit(limit)
        .offset(offset)
        .load(conn)?)
}

pub fn all_recipes(conn: &mut SqliteConnection) -> Result<Vec<Recipe>, StoreError> {
    Ok(recipes::table
        .select(Recipe::as_select())
        .order(recipes::id.asc())
        .load(conn)?)
}

pub fn count_recipes(conn: &mut SqliteConnection) -> Result<i64, StoreError> {
    Ok(recipes::table.count().get_result(conn)?)
}

pub fn delete_recipe(conn: &mut SqliteConnection, id: i32) -> Result<(), StoreError> {
    let deleted = diesel::delete(recipes::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    tracing::info!(id, "deleted recipe");
    Ok(())
}

/// Recipes matching every clause of `filter`, ordered by id.
///
/// Cooking time and difficulty are filtered in SQL; text clauses (substring and
/// wildcard) are evaluated on the loaded rows.
pub fn search_recipes(
    conn: &mut SqliteConnection,
    filter: &RecipeFilter,
) -> Result<Vec<Recipe>, StoreError> {
    let mut query = recipes::table
        .select(Recipe::as_select())
        .order(recipes::id.asc())
        .into_boxed();

    if let Some(max) = filter.max_cooking_time() {
        query = query.filter(recipes::cooking_time.le(max));
    }
    if let Some(difficulty) = filter.difficulty() {
        query = query.filter(recipes::difficulty.eq(difficulty.as_str()));
    }

    let candidates: Vec<Recipe> = query.load(conn)?;
    let loaded = candidates.len();
    if !filter.has_text_clauses() {
        // Every clause was applied in SQL
        tracing::debug!(clauses = filter.clauses().len(), loaded, "searched recipes");
        return Ok(candidates);
    }

    let matches: Vec<Recipe> = candidates
        .into_iter()
        .filter(|recipe| filter.matches(recipe))
        .collect();

    tracing::debug!(
        clauses = filter.clauses().len(),
        loaded,
        matched = matches.len(),
        "searched recipes"
    );
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::{Difficulty, RecipeFields, SearchCriteria, DEFAULT_IMAGE};

    fn conn() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        crate::db::run_migrations(&mut conn).unwrap();
        conn
    }

    fn input(name: &str, ingredients: &str, cooking_time: i64) -> RecipeInput {
        RecipeInput {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            cooking_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_create_derives_difficulty() {
        let mut conn = conn();
        let recipe = create_recipe(&mut conn, &input("Stew", "a,b,c,d", 25)).unwrap();

        let saved = get_recipe(&mut conn, recipe.id).unwrap();
        assert_eq!(saved.difficulty, "Hard");
        assert_eq!(saved.difficulty(), Difficulty::Hard);
        assert_eq!(saved.likes, 0);
        assert_eq!(saved.image, DEFAULT_IMAGE);
        assert_eq!(saved.comments, None);
    }

    #[test]
    fn test_create_with_all_fields() {
        let mut conn = conn();
        let recipe = create_recipe(
            &mut conn,
            &RecipeInput {
                short_description: Some("Simple and salty".to_string()),
                reference_url: Some("https://example.com/recipe".to_string()),
                image: Some("recipes/complete.png".to_string()),
                ..input("Complete Recipe", "Salt, Pepper, Oil, Garlic", 30)
            },
        )
        .unwrap();

        assert_eq!(recipe.name, "Complete Recipe");
        assert_eq!(recipe.ingredients, "Salt, Pepper, Oil, Garlic");
        assert_eq!(recipe.short_description.as_deref(), Some("Simple and salty"));
        assert_eq!(
            recipe.reference_url.as_deref(),
            Some("https://example.com/recipe")
        );
        assert_eq!(recipe.image, "recipes/complete.png");
        assert_eq!(recipe.difficulty, "Hard");
    }

    #[test]
    fn test_invalid_input_is_not_persisted() {
        let mut conn = conn();
        let err = create_recipe(&mut conn, &input(&"A".repeat(121), "Test", 10)).unwrap_err();

        match err {
            StoreError::Validation(errors) => assert!(errors.has_field("name")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(count_recipes(&mut conn).unwrap(), 0);
    }

    #[test]
    fn test_update_recomputes_difficulty() {
        let mut conn = conn();
        let recipe = create_recipe(&mut conn, &input("Eggs", "eggs", 5)).unwrap();
        assert_eq!(recipe.difficulty, "Easy");

        let updated =
            update_recipe(&mut conn, recipe.id, &input("Eggs", "eggs, butter, chives, salt", 5))
                .unwrap();
        assert_eq!(updated.id, recipe.id);
        assert_eq!(updated.difficulty, "Medium");

        let updated = update_recipe(&mut conn, recipe.id, &input("Eggs", "eggs", 12)).unwrap();
        assert_eq!(updated.difficulty, "Intermediate");
    }

    #[test]
    fn test_update_clears_optional_fields() {
        let mut conn = conn();
        let recipe = create_recipe(
            &mut conn,
            &RecipeInput {
                short_description: Some("Old".to_string()),
                ..input("Tea", "tea, water", 4)
            },
        )
        .unwrap();

        let updated = update_recipe(&mut conn, recipe.id, &input("Tea", "tea, water", 4)).unwrap();
        assert_eq!(updated.short_description, None);
    }

    #[test]
    fn test_missing_recipe() {
        let mut conn = conn();
        assert!(matches!(get_recipe(&mut conn, 42), Err(StoreError::NotFound)));
        assert!(matches!(delete_recipe(&mut conn, 42), Err(StoreError::NotFound)));
        assert!(matches!(
            update_recipe(&mut conn, 42, &input("X", "y", 1)),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_delete() {
        let mut conn = conn();
        let recipe = create_recipe(&mut conn, &input("Toast", "bread", 3)).unwrap();
        delete_recipe(&mut conn, recipe.id).unwrap();
        assert_eq!(count_recipes(&mut conn).unwrap(), 0);
    }

    #[test]
    fn test_list_pages_in_id_order() {
        let mut conn = conn();
        for name in ["A", "B", "C"] {
            create_recipe(&mut conn, &input(name, "x", 5)).unwrap();
        }

        let names: Vec<_> = list_recipes(&mut conn, 2, 1)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(all_recipes(&mut conn).unwrap().len(), 3);
    }

    #[test]
    fn test_search_combines_sql_and_text_clauses() {
        let mut conn = conn();
        create_recipe(&mut conn, &input("Tomato Soup", "tomato, onion, stock", 30)).unwrap();
        create_recipe(&mut conn, &input("Caprese", "tomato, mozzarella cheese, basil", 5)).unwrap();
        create_recipe(&mut conn, &input("Pizza", "dough, tomato, cheese, basil", 12)).unwrap();
        create_recipe(&mut conn, &input("Cheese Toast", "bread, cheese", 5)).unwrap();

        let search = |conn: &mut SqliteConnection, criteria: SearchCriteria| -> Vec<String> {
            let filter = criteria.to_filter().unwrap();
            search_recipes(conn, &filter)
                .unwrap()
                .into_iter()
                .map(|r| r.name)
                .collect()
        };

        let both = search(
            &mut conn,
            SearchCriteria {
                ingredients: Some("tomato, cheese".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(both, vec!["Caprese", "Pizza"]);

        let quick = search(
            &mut conn,
            SearchCriteria {
                ingredients: Some("chee*".to_string()),
                cooking_time_max: Some(10),
                ..Default::default()
            },
        );
        assert_eq!(quick, vec!["Caprese", "Cheese Toast"]);

        let hard = search(
            &mut conn,
            SearchCriteria {
                difficulty: Some(Difficulty::Hard),
                ..Default::default()
            },
        );
        assert_eq!(hard, vec!["Pizza"]);

        let everything = search(&mut conn, SearchCriteria::default());
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn test_search_with_only_sql_clauses() {
        let mut conn = conn();
        create_recipe(&mut conn, &input("Toast", "bread", 3)).unwrap();
        create_recipe(&mut conn, &input("Stew", "beef, carrot, onion, stock", 90)).unwrap();
        create_recipe(&mut conn, &input("Salad", "lettuce, tomato, cucumber, oil", 5)).unwrap();

        let filter = SearchCriteria {
            cooking_time_max: Some(10),
            difficulty: Some(Difficulty::Medium),
            ..Default::default()
        }
        .to_filter()
        .unwrap();
        assert!(!filter.has_text_clauses());

        let names: Vec<_> = search_recipes(&mut conn, &filter)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Salad"]);
    }
}
