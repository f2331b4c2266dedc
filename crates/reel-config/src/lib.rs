//! # reel-config
//!
//! Layered configuration loading for Reel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REEL_*` prefix, `__` as separator)
//! 2. Project-level `.reel/config.toml`
//! 3. User-level `~/.config/reel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REEL_DATABASE__PATH` -> `database.path`,
//! `REEL_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use reel_config::ReelConfig;
//!
//! let config = ReelConfig::load_with_dotenv().expect("config");
//! if config.database.is_remote() {
//!     println!("remote database: {}", config.database.url);
//! }
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".reel/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ReelConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    /// Sections are not validated here: a caller that opens the configured
    /// database checks it with [`DatabaseConfig::validate`] first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Load configuration after reading a `.env` file from the working
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        Self::figment_with_local(Path::new(LOCAL_CONFIG_PATH))
    }

    /// Build the provider chain with an explicit project-local config file.
    pub fn figment_with_local(local_path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("REEL_").split("__"))
    }

    /// Config files that exist and will be layered by [`Self::figment`].
    pub fn config_files() -> Vec<PathBuf> {
        Self::config_files_with_local(Path::new(LOCAL_CONFIG_PATH))
    }

    /// Same as [`Self::config_files`] with an explicit project-local file.
    pub fn config_files_with_local(local_path: &Path) -> Vec<PathBuf> {
        Self::global_config_path()
            .into_iter()
            .chain(std::iter::once(local_path.to_path_buf()))
            .filter(|path| path.exists())
            .collect()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reel").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_local() {
        let config = ReelConfig::default();
        assert!(!config.database.is_remote());
        assert_eq!(config.database.path, ".reel/reel.db");
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = ReelConfig::figment_with_local(Path::new("does/not/exist.toml"));
        let config: ReelConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.general.default_limit, 50);
    }
}
