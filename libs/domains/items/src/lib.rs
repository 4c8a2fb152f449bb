//! Items Domain
//!
//! Named counters persisted in MongoDB: create, list, get by name and
//! atomic increment.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, per-call store timeouts
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, MongoItemRepository, ItemService};
//! use database::mongodb::{MongoConfig, client_from_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! let client = client_from_config(&config).await?;
//! let db = client.database(config.database());
//!
//! let service = ItemService::new(MongoItemRepository::new(db));
//! service.spawn_ensure_indexes();
//!
//! let router = axum::Router::new().nest("/items", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, CreatedItem, Item, MAX_LIST_LIMIT};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
pub use service::{DEFAULT_STORE_TIMEOUT, ItemService};
