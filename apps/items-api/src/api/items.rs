//! Items API routes

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

/// Build the item service from the shared database and items config
pub fn service(state: &AppState) -> ItemService<MongoItemRepository> {
    let repository = MongoItemRepository::new(state.db.clone());

    ItemService::new(repository)
        .with_store_timeout(state.config.items.store_timeout())
        .with_list_limit(state.config.items.list_limit)
}

pub fn router(service: ItemService<MongoItemRepository>) -> Router {
    handlers::router(service)
}
