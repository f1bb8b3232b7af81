//! Subcommand implementations

pub mod add;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod favorites;
pub mod list;
pub mod show;

use anyhow::{Context, Result, bail};
use recipe_keeper_adapters::{
    remote::{HttpRecipeSource, StubRecipeSource},
    store::{FsKeyValueStore, InMemoryKeyValueStore, SqliteKeyValueStore},
};
use recipe_keeper_domain::usecases::RecipeRepository;
use recipe_keeper_domain::{KeyValueStore, Recipe, RecipeSource, UuidGenerator};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{AppConfig, RemoteConfig, StorageConfig};

pub(crate) type AppRepository =
    RecipeRepository<dyn RecipeSource, dyn KeyValueStore, UuidGenerator>;

/// Wire the repository from configuration
pub(crate) async fn build_repository(config: &AppConfig) -> Result<AppRepository> {
    let store = build_store(&config.storage).await?;
    let source = build_source(&config.remote)?;

    tracing::debug!(
        storage = %config.storage.backend,
        remote = source.name(),
        "Built recipe repository"
    );

    Ok(RecipeRepository::new(source, store, Arc::new(UuidGenerator)))
}

pub(crate) async fn build_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend.as_str() {
        "sqlite" => {
            let store = SqliteKeyValueStore::new(&config.path)
                .await
                .with_context(|| {
                    format!("Failed to open SQLite store at {}", config.path.display())
                })?;
            Ok(Arc::new(store))
        }
        "file" => {
            let store = FsKeyValueStore::new(&config.path)
                .await
                .with_context(|| {
                    format!("Failed to open file store at {}", config.path.display())
                })?;
            Ok(Arc::new(store))
        }
        "memory" => {
            tracing::warn!("Using in-memory storage; nothing will be persisted");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
        other => bail!(
            "Unknown storage backend: {} (expected sqlite, file or memory)",
            other
        ),
    }
}

pub(crate) fn build_source(config: &RemoteConfig) -> Result<Arc<dyn RecipeSource>> {
    match config.provider.as_str() {
        "http" => {
            let source = HttpRecipeSource::with_base_url(
                &config.base_url,
                Duration::from_secs(config.timeout_secs),
            )
            .context("Failed to initialize remote recipe client")?;
            Ok(Arc::new(source))
        }
        "stub" => Ok(Arc::new(StubRecipeSource::empty())),
        other => bail!("Unknown remote provider: {} (expected http or stub)", other),
    }
}

/// One-line summary used by listings
pub(crate) fn summary_line(recipe: &Recipe) -> String {
    format!(
        "{}  {} [{}] ({})",
        recipe.id,
        recipe.name,
        recipe.category().unwrap_or("-"),
        recipe.origin.as_str()
    )
}
