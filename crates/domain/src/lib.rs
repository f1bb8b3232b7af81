//! recipe-keeper domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Recipe entity and value objects
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: Local collections, the recipe repository, display grouping
//! - `validation`: Presence checks for locally-created recipes

pub mod model;
pub mod ports;
pub mod usecases;
pub mod validation;

pub use model::*;
pub use ports::*;
pub use validation::ValidationError;
