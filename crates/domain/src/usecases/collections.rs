//! Recipe collections stored as whole serialized sequences in a key-value store

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    model::{CollectionKey, Recipe, RecipeOrigin},
    ports::{KeyValueStore, StorageError},
};

/// Ordered recipe collections over a [`KeyValueStore`].
///
/// Every mutation is a read-modify-write of the whole collection. Mutations
/// on the same key are serialized by a per-key lock held for the full cycle,
/// so concurrent callers within one process cannot lose each other's writes.
pub struct CollectionStore<K: KeyValueStore + ?Sized> {
    store: Arc<K>,
    recipes_lock: Mutex<()>,
    favorites_lock: Mutex<()>,
}

impl<K: KeyValueStore + ?Sized> CollectionStore<K> {
    pub fn new(store: Arc<K>) -> Self {
        Self {
            store,
            recipes_lock: Mutex::new(()),
            favorites_lock: Mutex::new(()),
        }
    }

    async fn lock(&self, key: CollectionKey) -> MutexGuard<'_, ()> {
        match key {
            CollectionKey::Recipes => self.recipes_lock.lock().await,
            CollectionKey::Favorites => self.favorites_lock.lock().await,
        }
    }

    /// Load a collection, degrading to empty on any failure
    pub async fn load_all(&self, key: CollectionKey) -> Vec<Recipe> {
        match self.read(key).await {
            Ok(recipes) => recipes,
            Err(error) => {
                tracing::warn!(key = %key, error = %error, "Failed to load collection");
                vec![]
            }
        }
    }

    /// Load a collection, reporting storage and parse failures
    pub async fn try_load_all(&self, key: CollectionKey) -> Result<Vec<Recipe>, StorageError> {
        self.read(key).await
    }

    /// Replace a whole collection
    pub async fn save_all(
        &self,
        key: CollectionKey,
        recipes: &[Recipe],
    ) -> Result<(), StorageError> {
        let _guard = self.lock(key).await;
        self.write(key, recipes).await
    }

    /// Append a recipe at the end of a collection
    pub async fn append(&self, key: CollectionKey, recipe: Recipe) -> Result<(), StorageError> {
        let _guard = self.lock(key).await;
        let mut recipes = self.read(key).await?;
        recipes.push(recipe);
        self.write(key, &recipes).await
    }

    /// Append unless a recipe with the same id is present; returns whether it was added
    pub async fn append_if_absent(
        &self,
        key: CollectionKey,
        recipe: Recipe,
    ) -> Result<bool, StorageError> {
        let _guard = self.lock(key).await;
        let mut recipes = self.read(key).await?;
        if recipes.iter().any(|r| r.id == recipe.id) {
            return Ok(false);
        }
        recipes.push(recipe);
        self.write(key, &recipes).await?;
        Ok(true)
    }

    /// Replace the entry with `id` in place; returns whether one matched
    pub async fn replace_by_id(
        &self,
        key: CollectionKey,
        id: &str,
        recipe: Recipe,
    ) -> Result<bool, StorageError> {
        let _guard = self.lock(key).await;
        let mut recipes = self.read(key).await?;
        let Some(slot) = recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        *slot = recipe;
        self.write(key, &recipes).await?;
        Ok(true)
    }

    /// Remove every entry with `id`; returns whether any was removed
    pub async fn remove_by_id(&self, key: CollectionKey, id: &str) -> Result<bool, StorageError> {
        let _guard = self.lock(key).await;
        let mut recipes = self.read(key).await?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            return Ok(false);
        }
        self.write(key, &recipes).await?;
        Ok(true)
    }

    /// Find the first entry with `id`, degrading to absent on failure
    pub async fn find_by_id(&self, key: CollectionKey, id: &str) -> Option<Recipe> {
        self.load_all(key).await.into_iter().find(|r| r.id == id)
    }

    async fn read(&self, key: CollectionKey) -> Result<Vec<Recipe>, StorageError> {
        let Some(raw) = self.store.get(key.as_str()).await? else {
            return Ok(vec![]);
        };

        let mut recipes: Vec<Recipe> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        if key == CollectionKey::Recipes {
            for recipe in &mut recipes {
                recipe.origin = RecipeOrigin::Local;
            }
        }

        Ok(recipes)
    }

    async fn write(&self, key: CollectionKey, recipes: &[Recipe]) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(recipes).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(key.as_str(), &raw).await?;

        tracing::debug!(key = %key, count = recipes.len(), "Saved collection");
        Ok(())
    }
}
