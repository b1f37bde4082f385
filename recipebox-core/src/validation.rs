//! Write-time validation for recipes.
//!
//! Every mutation goes through [`prepare_recipe`]: validate all fields, then derive
//! the difficulty. The store only accepts the resulting [`PreparedRecipe`], so a
//! persisted difficulty always agrees with the persisted cooking time and ingredients.

use serde::Deserialize;

use crate::difficulty::difficulty_for;
use crate::error::{FieldError, ValidationErrors};
use crate::types::Difficulty;
use crate::DEFAULT_IMAGE;

pub const NAME_MAX_CHARS: usize = 120;
pub const SHORT_DESCRIPTION_MAX_CHARS: usize = 300;
pub const COOKING_TIME_MIN: i64 = 1;
/// 24 hours
pub const COOKING_TIME_MAX: i64 = 1440;

/// Editable recipe fields as submitted by a client.
///
/// `cooking_time` is wider than the stored column so out-of-range values are
/// reported as field errors instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: String,
    pub cooking_time: i64,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub reference_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A validated recipe with its derived fields filled in, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRecipe {
    pub name: String,
    pub ingredients: String,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    pub short_description: Option<String>,
    pub reference_url: Option<String>,
    pub image: String,
}

/// Validate `input` and derive its difficulty.
///
/// All field errors are collected before returning, so a client sees every
/// problem with a submission at once.
pub fn prepare_recipe(input: &RecipeInput) -> Result<PreparedRecipe, ValidationErrors> {
    let mut errors = Vec::new();

    let name = input.name.trim();
    if name.is_empty() {
        errors.push(FieldError::new("name", "Recipe name cannot be empty."));
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push(FieldError::new(
            "name",
            format!("Recipe name cannot exceed {} characters.", NAME_MAX_CHARS),
        ));
    }

    let ingredients = input.ingredients.trim();
    if ingredients.is_empty() {
        errors.push(FieldError::new("ingredients", "Ingredients cannot be empty."));
    }

    let cooking_time = match i32::try_from(input.cooking_time) {
        Ok(t) if (COOKING_TIME_MIN..=COOKING_TIME_MAX).contains(&input.cooking_time) => Some(t),
        _ if input.cooking_time < COOKING_TIME_MIN => {
            errors.push(FieldError::new(
                "cooking_time",
                "Cooking time must be at least 1 minute.",
            ));
            None
        }
        _ => {
            errors.push(FieldError::new(
                "cooking_time",
                "Cooking time cannot exceed 24 hours (1440 minutes).",
            ));
            None
        }
    };

    let short_description = non_blank(input.short_description.as_deref());
    if let Some(description) = short_description {
        if description.chars().count() > SHORT_DESCRIPTION_MAX_CHARS {
            errors.push(FieldError::new(
                "short_description",
                format!(
                    "Short description cannot exceed {} characters.",
                    SHORT_DESCRIPTION_MAX_CHARS
                ),
            ));
        }
    }

    let reference_url = non_blank(input.reference_url.as_deref());
    if let Some(reference) = reference_url {
        if let Err(message) = check_reference_url(reference) {
            errors.push(FieldError::new("reference_url", message));
        }
    }

    let image = non_blank(input.image.as_deref()).unwrap_or(DEFAULT_IMAGE);

    match cooking_time {
        Some(cooking_time) if errors.is_empty() => Ok(PreparedRecipe {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            cooking_time,
            difficulty: difficulty_for(cooking_time, ingredients),
            short_description: short_description.map(str::to_string),
            reference_url: reference_url.map(str::to_string),
            image: image.to_string(),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_reference_url(reference: &str) -> Result<(), String> {
    let parsed =
        url::Url::parse(reference).map_err(|e| format!("Enter a valid URL ({}).", e))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        _ => Err("Enter a valid http or https URL.".to_string()),
    }
}
