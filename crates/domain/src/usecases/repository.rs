//! Recipe repository - one recipe API over the local collections and the remote catalog

use std::sync::Arc;
use thiserror::Error;

use crate::{
    model::{CollectionKey, Lookup, NewRecipe, Recipe, RecipeOrigin, RecipePatch},
    ports::{IdGenerator, KeyValueStore, RecipeSource, StorageError},
    usecases::collections::CollectionStore,
    validation::{self, ValidationError},
};

/// Errors surfaced by repository mutations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Recipe '{id}' is not a local recipe and cannot be modified")]
    NotLocal { id: String },
}

/// Merge point between the local collections and the remote recipe source
pub struct RecipeRepository<S, K, I>
where
    S: RecipeSource + ?Sized,
    K: KeyValueStore + ?Sized,
    I: IdGenerator + ?Sized,
{
    source: Arc<S>,
    collections: CollectionStore<K>,
    ids: Arc<I>,
}

impl<S, K, I> RecipeRepository<S, K, I>
where
    S: RecipeSource + ?Sized,
    K: KeyValueStore + ?Sized,
    I: IdGenerator + ?Sized,
{
    pub fn new(source: Arc<S>, store: Arc<K>, ids: Arc<I>) -> Self {
        Self {
            source,
            collections: CollectionStore::new(store),
            ids,
        }
    }

    /// All remote recipes; empty when the source fails
    pub async fn list_remote(&self) -> Vec<Recipe> {
        match self.source.list_all().await {
            Ok(recipes) => tag_remote(recipes),
            Err(error) => {
                tracing::warn!(
                    source = self.source.name(),
                    error = %error,
                    "Failed to list remote recipes"
                );
                vec![]
            }
        }
    }

    /// Remote recipes of one category; empty when the source fails
    pub async fn list_by_category(&self, category: &str) -> Vec<Recipe> {
        match self.source.list_by_category(category).await {
            Ok(recipes) => tag_remote(recipes),
            Err(error) => {
                tracing::warn!(
                    source = self.source.name(),
                    category = %category,
                    error = %error,
                    "Failed to list remote recipes by category"
                );
                vec![]
            }
        }
    }

    /// Recipes created on this device, in insertion order
    pub async fn list_local(&self) -> Vec<Recipe> {
        self.collections.load_all(CollectionKey::Recipes).await
    }

    /// Remote recipes followed by local ones, without de-duplication
    pub async fn list_combined(&self) -> Vec<Recipe> {
        let mut recipes = self.list_remote().await;
        recipes.extend(self.list_local().await);

        tracing::debug!(count = recipes.len(), "Listed combined recipes");
        recipes
    }

    /// Look a recipe up locally first, then remotely
    pub async fn get_by_id(&self, id: &str) -> Lookup {
        if let Some(recipe) = self.collections.find_by_id(CollectionKey::Recipes, id).await {
            return Lookup::Found(recipe);
        }

        match self.source.get_by_id(id).await {
            Ok(Some(mut recipe)) => {
                recipe.origin = RecipeOrigin::Remote;
                Lookup::Found(recipe)
            }
            Ok(None) => Lookup::NotFound,
            Err(error) => {
                tracing::warn!(
                    source = self.source.name(),
                    recipe_id = %id,
                    error = %error,
                    "Failed to fetch remote recipe"
                );
                Lookup::Unavailable(error.to_string())
            }
        }
    }

    /// Validate and save a new local recipe
    pub async fn create(&self, input: NewRecipe) -> Result<Recipe, RepositoryError> {
        let recipe = validation::build_local(self.ids.next_id(), input)?;

        self.collections
            .append(CollectionKey::Recipes, recipe.clone())
            .await?;

        tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "Created recipe");
        Ok(recipe)
    }

    /// Replace a local recipe by id
    pub async fn update(&self, recipe: Recipe) -> Result<Recipe, RepositoryError> {
        validation::validate_recipe(&recipe)?;

        let recipe = Recipe {
            origin: RecipeOrigin::Local,
            ..recipe
        };
        let replaced = self
            .collections
            .replace_by_id(CollectionKey::Recipes, &recipe.id, recipe.clone())
            .await?;

        if !replaced {
            return Err(RepositoryError::NotLocal { id: recipe.id });
        }

        tracing::info!(recipe_id = %recipe.id, "Updated recipe");
        Ok(recipe)
    }

    /// Apply a partial edit to a local recipe
    pub async fn edit(&self, id: &str, patch: &RecipePatch) -> Result<Recipe, RepositoryError> {
        let current = self
            .collections
            .try_load_all(CollectionKey::Recipes)
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::NotLocal { id: id.to_string() })?;

        self.update(patch.apply(&current)).await
    }

    /// Delete a local recipe by id
    pub async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let removed = self
            .collections
            .remove_by_id(CollectionKey::Recipes, id)
            .await?;

        if !removed {
            return Err(RepositoryError::NotLocal { id: id.to_string() });
        }

        tracing::info!(recipe_id = %id, "Deleted recipe");
        Ok(())
    }

    /// Snapshot a recipe into favorites; returns false if it was already there
    pub async fn add_favorite(&self, recipe: Recipe) -> Result<bool, RepositoryError> {
        let id = recipe.id.clone();
        let added = self
            .collections
            .append_if_absent(CollectionKey::Favorites, recipe)
            .await?;

        if added {
            tracing::info!(recipe_id = %id, "Added favorite");
        } else {
            tracing::debug!(recipe_id = %id, "Recipe already a favorite");
        }
        Ok(added)
    }

    /// Drop a favorite; returns false if it was not a favorite
    pub async fn remove_favorite(&self, id: &str) -> Result<bool, RepositoryError> {
        let removed = self
            .collections
            .remove_by_id(CollectionKey::Favorites, id)
            .await?;

        if removed {
            tracing::info!(recipe_id = %id, "Removed favorite");
        }
        Ok(removed)
    }

    /// Favorite snapshots, in the order they were added
    pub async fn list_favorites(&self) -> Vec<Recipe> {
        self.collections.load_all(CollectionKey::Favorites).await
    }

    pub async fn is_favorite(&self, id: &str) -> bool {
        self.list_favorites().await.iter().any(|r| r.id == id)
    }

    /// Flip favorite membership; returns whether the recipe is now a favorite
    pub async fn toggle_favorite(&self, recipe: Recipe) -> Result<bool, RepositoryError> {
        if self.is_favorite(&recipe.id).await {
            self.remove_favorite(&recipe.id).await?;
            Ok(false)
        } else {
            self.add_favorite(recipe).await?;
            Ok(true)
        }
    }
}

fn tag_remote(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    for recipe in &mut recipes {
        recipe.origin = RecipeOrigin::Remote;
    }
    recipes
}
