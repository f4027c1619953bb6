//! KvStore - Key-Value Persistence
//!
//! ## Responsibilities
//!
//! - Async mapping from string keys to JSON values
//! - Whole-document get/set/delete, nothing finer
//!
//! Collections are stored as complete JSON arrays under a single key, so
//! the unit of write is the full collection.

mod memory;
mod mysql;

pub use memory::MemoryKvStore;
pub use mysql::MySqlKvStore;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Async string-key to JSON-value store
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value for a key, `None` if absent
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Set the value for a key, overwriting any existing value
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Delete a key if present
    async fn delete(&self, key: &str) -> Result<()>;
}
