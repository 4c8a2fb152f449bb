//! Application state management.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned per handler; the MongoDB client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, built lazily at startup
    pub mongo_client: Client,
    /// The configured database (`myapp` by default)
    pub db: Database,
}
