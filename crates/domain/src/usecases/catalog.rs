//! Grouping recipes for display

use crate::model::{CategoryGroup, OTHER_CATEGORY, Recipe};

/// Group recipes by upper-cased category.
///
/// Groups appear in the order their category is first seen; recipes keep
/// their input order. Recipes without a category go to [`OTHER_CATEGORY`].
pub fn group_by_category(recipes: &[Recipe]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for recipe in recipes {
        let name = recipe
            .category()
            .map(str::to_uppercase)
            .unwrap_or_else(|| OTHER_CATEGORY.to_string());

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.recipes.push(recipe.clone()),
            None => groups.push(CategoryGroup {
                name,
                recipes: vec![recipe.clone()],
            }),
        }
    }

    groups
}
