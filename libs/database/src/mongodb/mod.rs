//! MongoDB connection management and driver helpers

mod config;
mod connector;
mod errors;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, client_from_config, connect_from_config, ping};
pub use errors::{DUPLICATE_KEY_CODE, is_duplicate_key};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
