//! Service configuration
//!
//! Values are layered: built-in defaults, then `config/marketplace.toml` if it
//! exists, then `MARKETPLACE__*` environment variables (`__` separates nested
//! keys, e.g. `MARKETPLACE__STORE__BACKEND=file`).

use common::StoreConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Marketplace service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub http_addr: String,
    /// Treat requests without a bearer token as the development user
    pub dev_mode: bool,
    /// Persistence backend
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from the default file location and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/marketplace")
    }

    /// Load configuration, reading the optional file at `path` (extension
    /// inferred)
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let defaults = StoreConfig::default();

        Config::builder()
            .set_default("http_addr", "0.0.0.0:3001")?
            .set_default("dev_mode", false)?
            .set_default("store.backend", "memory")?
            .set_default("store.path", defaults.path.to_string_lossy().to_string())?
            .set_default("store.redis_url", defaults.redis_url)?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("MARKETPLACE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
