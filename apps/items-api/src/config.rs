use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_items::MAX_LIST_LIMIT;
use std::time::Duration;

pub use core_config::Environment;

const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Items endpoint tuning
#[derive(Clone, Debug)]
pub struct ItemsConfig {
    /// Deadline for each store call, in milliseconds
    pub store_timeout_ms: u64,
    /// Maximum items returned by `GET /items`
    pub list_limit: i64,
}

impl ItemsConfig {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
            list_limit: MAX_LIST_LIMIT,
        }
    }
}

impl FromEnv for ItemsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let store_timeout_ms = env_parse_or("ITEMS_STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT_MS)?;
        if store_timeout_ms == 0 {
            return Err(ConfigError::ParseError {
                key: "ITEMS_STORE_TIMEOUT_MS".to_string(),
                details: "must be greater than 0".to_string(),
            });
        }

        let list_limit = env_parse_or("ITEMS_LIST_LIMIT", MAX_LIST_LIMIT)?;
        if !(1..=MAX_LIST_LIMIT).contains(&list_limit) {
            return Err(ConfigError::ParseError {
                key: "ITEMS_LIST_LIMIT".to_string(),
                details: format!("must be between 1 and {}", MAX_LIST_LIMIT),
            });
        }

        Ok(Self {
            store_timeout_ms,
            list_limit,
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub items: ItemsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let items = ItemsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            items,
            environment,
        })
    }
}
