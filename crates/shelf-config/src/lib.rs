//! # shelf-config
//!
//! Layered configuration loading for Shelf using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHELF_*` prefix, `__` as separator)
//! 2. Project-level `shelf.toml`
//! 3. User-level `~/.config/shelf/config.toml`
//! 4. Built-in defaults
//!
//! With no files and no environment the defaults reproduce the fixed
//! behaviour of the service: listen on port 4000, seed from Open Library
//! (`author=tolkien`, `limit=5`), fall back to the built-in list.
//!
//! # Environment Variable Mapping
//!
//! `SHELF_SERVER__PORT` -> `server.port`, `SHELF_CATALOG__ENABLED` -> `catalog.enabled`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use shelf_config::ShelfConfig;
//!
//! let config = ShelfConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod catalog;
mod error;
mod seed;
mod server;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use seed::SeedConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound accepted by the Open Library search API for `limit`.
pub const MAX_CATALOG_LIMIT: u32 = 100;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "shelf.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl ShelfConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction or validation failure.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SHELF_").split("__"))
    }

    /// Check value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.limit == 0 || self.catalog.limit > MAX_CATALOG_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "catalog.limit".to_string(),
                reason: format!("must be between 1 and {MAX_CATALOG_LIMIT}"),
            });
        }
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shelf").join("config.toml"))
    }
}
