//! API routes module

pub mod health;
pub mod items;

use axum::Router;
use domain_items::{ItemService, MongoItemRepository};

use crate::state::AppState;

/// Create all API routes, mounted at the root by `axum_helpers::create_router`
pub fn routes(state: &AppState, items: ItemService<MongoItemRepository>) -> Router {
    Router::new()
        .nest("/items", items::router(items))
        .merge(health::router(state.clone()))
}
