use chrono::NaiveDateTime;
use diesel::prelude::*;
use recipebox_core::{PreparedRecipe, RecipeFields};

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub short_description: Option<String>,
    pub ingredients: String,
    pub cooking_time: i32,
    /// Stored copy of the derived label, kept for filtering in SQL
    pub difficulty: String,
    pub likes: i32,
    pub comments: Option<String>,
    pub reference_url: Option<String>,
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RecipeFields for Recipe {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn ingredients(&self) -> &str {
        &self.ingredients
    }

    fn cooking_time(&self) -> i32 {
        self.cooking_time
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub name: &'a str,
    pub short_description: Option<&'a str>,
    pub ingredients: &'a str,
    pub cooking_time: i32,
    pub difficulty: &'a str,
    pub reference_url: Option<&'a str>,
    pub image: &'a str,
}

impl<'a> From<&'a PreparedRecipe> for NewRecipe<'a> {
    fn from(recipe: &'a PreparedRecipe) -> Self {
        Self {
            name: &recipe.name,
            short_description: recipe.short_description.as_deref(),
            ingredients: &recipe.ingredients,
            cooking_time: recipe.cooking_time,
            difficulty: recipe.difficulty.as_str(),
            reference_url: recipe.reference_url.as_deref(),
            image: &recipe.image,
        }
    }
}

/// Full replacement of the editable columns. Likes and comments are never written here.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(treat_none_as_null = true)]
pub struct RecipeChanges<'a> {
    pub name: &'a str,
    pub short_description: Option<&'a str>,
    pub ingredients: &'a str,
    pub cooking_time: i32,
    pub difficulty: &'a str,
    pub reference_url: Option<&'a str>,
    pub image: &'a str,
    pub updated_at: NaiveDateTime,
}

impl<'a> RecipeChanges<'a> {
    pub fn new(recipe: &'a PreparedRecipe, updated_at: NaiveDateTime) -> Self {
        Self {
            name: &recipe.name,
            short_description: recipe.short_description.as_deref(),
            ingredients: &recipe.ingredients,
            cooking_time: recipe.cooking_time,
            difficulty: recipe.difficulty.as_str(),
            reference_url: recipe.reference_url.as_deref(),
            image: &recipe.image,
            updated_at,
        }
    }
}
