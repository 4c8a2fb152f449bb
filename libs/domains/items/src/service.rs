//! Item Service - Business logic layer

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, MAX_LIST_LIMIT};
use crate::repository::ItemRepository;

/// Deadline applied to each store call unless overridden
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Item service providing business logic operations
///
/// Every repository call except index setup is bounded by `store_timeout`;
/// a call that runs past it fails with [`ItemError::Timeout`] and is not retried.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    store_timeout: Duration,
    list_limit: i64,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            store_timeout: DEFAULT_STORE_TIMEOUT,
            list_limit: MAX_LIST_LIMIT,
        }
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Set the list cap, clamped to `1..=MAX_LIST_LIMIT`
    pub fn with_list_limit(mut self, limit: i64) -> Self {
        self.list_limit = limit.clamp(1, MAX_LIST_LIMIT);
        self
    }

    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }

    pub fn list_limit(&self) -> i64 {
        self.list_limit
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = ItemResult<T>>,
    ) -> ItemResult<T> {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| {
                tracing::warn!(operation, timeout = ?self.store_timeout, "Store call timed out");
                ItemError::Timeout {
                    operation,
                    timeout: self.store_timeout,
                }
            })?
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.bounded("insert_one", self.repository.create(input))
            .await
    }

    /// List items, capped at the configured limit
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.bounded("find", self.repository.list(self.list_limit))
            .await
    }

    /// Get an item by name
    #[instrument(skip(self))]
    pub async fn get_item(&self, name: &str) -> ItemResult<Item> {
        self.bounded("find_one", self.repository.get_by_name(name))
            .await?
            .ok_or_else(|| ItemError::NotFound(name.to_string()))
    }

    /// Atomically increment an item's count by one
    #[instrument(skip(self))]
    pub async fn increment_item(&self, name: &str) -> ItemResult<Item> {
        self.bounded(
            "find_one_and_update",
            self.repository.increment_by_name(name),
        )
        .await?
        .ok_or_else(|| ItemError::NotFound(name.to_string()))
    }

    /// Create store indexes; unbounded since it runs off the request path
    #[instrument(skip(self))]
    pub async fn ensure_indexes(&self) -> ItemResult<()> {
        self.repository.ensure_indexes().await
    }
}

impl<R: ItemRepository + 'static> ItemService<R> {
    /// Run [`ensure_indexes`](Self::ensure_indexes) in the background.
    ///
    /// Failure is logged at `warn` and otherwise ignored, so startup never
    /// waits on the store.
    pub fn spawn_ensure_indexes(&self) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            match service.ensure_indexes().await {
                Ok(()) => tracing::info!("Item indexes ensured"),
                Err(e) => tracing::warn!(error = %e, "Failed to ensure item indexes, continuing"),
            }
        })
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            store_timeout: self.store_timeout,
            list_limit: self.list_limit,
        }
    }
}
