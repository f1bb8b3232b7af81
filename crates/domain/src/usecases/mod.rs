//! Application use cases / business logic

pub mod catalog;
pub mod collections;
pub mod repository;

#[cfg(test)]
mod test_support;

pub use catalog::group_by_category;
pub use collections::CollectionStore;
pub use repository::{RecipeRepository, RepositoryError};
