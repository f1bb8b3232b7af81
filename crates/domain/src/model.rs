//! Domain models and value objects

use serde::{Deserialize, Serialize};

/// Image used when a recipe is saved without one
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Group name for recipes without a category
pub const OTHER_CATEGORY: &str = "OTHER";

/// Name used when the remote service omits one
pub const UNNAMED_RECIPE: &str = "Name not available";

/// Where a recipe lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecipeOrigin {
    /// Created on this device, editable and deletable
    #[default]
    Local,
    /// Projected from the remote service, read-only
    Remote,
}

impl RecipeOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeOrigin::Local => "local",
            RecipeOrigin::Remote => "remote",
        }
    }
}

/// A recipe, in the shape persisted under the local collection keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique within its source
    pub id: String,
    pub name: String,
    /// Free-text preparation steps
    pub instructions: String,
    /// Local file path or remote URL
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Display group (a.k.a. "tipo")
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Only provided by the remote service
    #[serde(
        rename = "ingredientes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub origin: RecipeOrigin,
}

impl Recipe {
    /// Category with blank values treated as absent
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn is_local(&self) -> bool {
        self.origin == RecipeOrigin::Local
    }
}

/// Input for creating a local recipe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub instructions: String,
    /// Blank or absent falls back to [`PLACEHOLDER_IMAGE_URL`]
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Partial edit of a local recipe.
///
/// Absent or blank fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub name: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl RecipePatch {
    /// Produce the full replacement for `current`
    pub fn apply(&self, current: &Recipe) -> Recipe {
        fn pick(new: &Option<String>, old: &str) -> String {
            match new.as_deref() {
                Some(value) if !value.trim().is_empty() => value.to_string(),
                _ => old.to_string(),
            }
        }

        fn pick_trimmed(new: &Option<String>, old: &str) -> String {
            match new.as_deref().map(str::trim) {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => old.to_string(),
            }
        }

        let category = match self.category.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => current.category.clone(),
        };

        Recipe {
            id: current.id.clone(),
            name: pick(&self.name, &current.name),
            instructions: pick(&self.instructions, &current.instructions),
            image_url: pick_trimmed(&self.image_url, &current.image_url),
            category,
            ingredients: current.ingredients.clone(),
            origin: current.origin,
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.instructions,
            &self.image_url,
            &self.category,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}

/// Fixed storage keys for the two local collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    /// Recipes created on this device
    Recipes,
    /// Snapshot copies of favorited recipes
    Favorites,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 2] = [CollectionKey::Recipes, CollectionKey::Favorites];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Recipes => "recipes",
            CollectionKey::Favorites => "favorites",
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of looking a recipe up by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The recipe exists
    Found(Recipe),
    /// Every source answered and none had it
    NotFound,
    /// The remote source could not be asked
    Unavailable(String),
}

impl Lookup {
    /// Collapse to found/absent
    pub fn into_option(self) -> Option<Recipe> {
        match self {
            Lookup::Found(recipe) => Some(recipe),
            Lookup::NotFound | Lookup::Unavailable(_) => None,
        }
    }
}

/// Recipes sharing a display category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Upper-cased category, or [`OTHER_CATEGORY`]
    pub name: String,
    pub recipes: Vec<Recipe>,
}
