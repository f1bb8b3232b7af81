//! Presence checks for locally-created recipes

use crate::model::{NewRecipe, PLACEHOLDER_IMAGE_URL, Recipe, RecipeOrigin};

/// Validation errors for recipe input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Check required fields of a create request
pub fn validate_new(input: &NewRecipe) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if input.instructions.trim().is_empty() {
        return Err(ValidationError::MissingField("instructions"));
    }
    Ok(())
}

/// Check required fields of a full replacement
pub fn validate_recipe(recipe: &Recipe) -> Result<(), ValidationError> {
    if recipe.id.trim().is_empty() {
        return Err(ValidationError::MissingField("id"));
    }
    if recipe.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if recipe.instructions.trim().is_empty() {
        return Err(ValidationError::MissingField("instructions"));
    }
    Ok(())
}

/// Validate `input` and build the local recipe it describes
pub fn build_local(id: String, input: NewRecipe) -> Result<Recipe, ValidationError> {
    validate_new(&input)?;

    let image_url = input
        .image_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

    let category = input
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    Ok(Recipe {
        id,
        name: input.name,
        instructions: input.instructions,
        image_url,
        category,
        ingredients: None,
        origin: RecipeOrigin::Local,
    })
}
