use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item};

/// Repository trait for Item persistence
///
/// Implementations own the uniqueness of `name` and the atomicity of
/// increments; the service never checks either itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Create the unique index on `name` if it does not exist yet
    async fn ensure_indexes(&self) -> ItemResult<()>;

    /// Insert a new item, failing with `DuplicateName` if the name is taken
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// List up to `limit` items in store order
    async fn list(&self, limit: i64) -> ItemResult<Vec<Item>>;

    /// Get an item by exact name
    async fn get_by_name(&self, name: &str) -> ItemResult<Option<Item>>;

    /// Atomically add 1 to `count` and return the updated item
    async fn increment_by_name(&self, name: &str) -> ItemResult<Option<Item>>;
}
