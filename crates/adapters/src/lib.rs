//! recipe-keeper adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `store`: in-memory, SQLite and JSON-file key-value stores
//! - `remote`: HTTP recipe catalog client and an offline stub

mod kv_fs;
mod kv_memory;
mod kv_sqlite;

pub mod remote;

/// Re-exports for key-value store adapters
pub mod store {
    pub use crate::kv_fs::FsKeyValueStore;
    pub use crate::kv_memory::InMemoryKeyValueStore;
    pub use crate::kv_sqlite::SqliteKeyValueStore;
}
