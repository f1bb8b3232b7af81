//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::model::Recipe;

/// Error type for key-value store operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Stored value under '{key}' is unreadable: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Port for the on-device persistent key-value store.
///
/// Values are opaque UTF-8 text. Implementations provide no cross-call
/// atomicity; callers needing read-modify-write must serialize themselves.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`; absent keys are not an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Error type for remote recipe source operations
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Remote returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Port for the read-only remote recipe catalog
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch every recipe the service offers
    async fn list_all(&self) -> Result<Vec<Recipe>, SourceError>;

    /// Fetch one recipe; `Ok(None)` means the service answered that it has none
    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError>;

    /// Fetch recipes filtered server-side by category
    async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>, SourceError>;

    /// Short name for logs and diagnostics (e.g., "http", "stub")
    fn name(&self) -> &'static str;
}

/// Port for generating ids of locally-created recipes (enables deterministic testing)
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUID ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
