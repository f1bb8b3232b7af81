//! Fakes shared by the use case tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{
    model::{Recipe, RecipeOrigin},
    ports::{IdGenerator, KeyValueStore, RecipeSource, SourceError, StorageError},
};

pub fn recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recipe {id}"),
        instructions: "Mix and bake".to_string(),
        image_url: "https://example.com/image.png".to_string(),
        category: None,
        ingredients: None,
        origin: RecipeOrigin::Local,
    }
}

pub fn remote_recipe(id: &str, category: &str) -> Recipe {
    Recipe {
        category: Some(category.to_string()),
        ingredients: Some("flour, eggs".to_string()),
        origin: RecipeOrigin::Remote,
        ..recipe(id)
    }
}

/// Key-value store that yields between operations so interleavings show up
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn put_raw(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        tokio::task::yield_now().await;
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::task::yield_now().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("disk full".to_string()));
        }
        self.put_raw(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Remote source answering from a fixed list, or failing every call
pub struct FakeSource {
    pub recipes: Vec<Recipe>,
    pub unavailable: bool,
}

impl FakeSource {
    pub fn with(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            unavailable: false,
        }
    }

    pub fn down() -> Self {
        Self {
            recipes: vec![],
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), SourceError> {
        if self.unavailable {
            return Err(SourceError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeSource for FakeSource {
    async fn list_all(&self) -> Result<Vec<Recipe>, SourceError> {
        self.check()?;
        Ok(self.recipes.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError> {
        self.check()?;
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>, SourceError> {
        self.check()?;
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.category() == Some(category))
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Sequential ids: "id-1", "id-2", ...
#[derive(Default)]
pub struct SequentialIds(AtomicUsize);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
