use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::client_from_config;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Lazy client: a database that is down at boot does not block startup.
    let mongo_client = client_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        database = config.mongodb.database(),
        store_timeout = ?config.items.store_timeout(),
        list_limit = config.items.list_limit,
        "MongoDB client ready"
    );

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let items = api::items::service(&state);
    items.spawn_ensure_indexes();

    let api_routes = api::routes(&state, items);

    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    let app = router.merge(health_router(state.config.app));

    info!("Starting Items API with graceful shutdown (30s timeout)");

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
