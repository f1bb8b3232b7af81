//! Remote recipe catalog adapters

mod http;
mod wire;

pub use http::HttpRecipeSource;

use async_trait::async_trait;
use recipe_keeper_domain::{Recipe, RecipeOrigin, RecipeSource, SourceError};

/// Stub recipe source for testing and offline mode
pub struct StubRecipeSource {
    recipes: Vec<Recipe>,
}

impl StubRecipeSource {
    /// Create an empty stub
    pub fn empty() -> Self {
        Self { recipes: vec![] }
    }

    /// Create a stub serving predefined recipes
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let recipes = recipes
            .into_iter()
            .map(|recipe| Recipe {
                origin: RecipeOrigin::Remote,
                ..recipe
            })
            .collect();
        Self { recipes }
    }
}

impl Default for StubRecipeSource {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl RecipeSource for StubRecipeSource {
    async fn list_all(&self) -> Result<Vec<Recipe>, SourceError> {
        Ok(self.recipes.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError> {
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>, SourceError> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| {
                r.category()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category.trim()))
            })
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
