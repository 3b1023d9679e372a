//! # atlas-config
//!
//! Layered configuration loading for Atlas using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATLAS_*` prefix, `__` as separator)
//! 2. Project-level `.atlas/config.toml`
//! 3. User-level `~/.config/atlas/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATLAS_CONTENT__PATH` -> `content.path`,
//! `ATLAS_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use atlas_config::AtlasConfig;
//!
//! let config = AtlasConfig::load_with_dotenv(Path::new(".")).expect("config");
//! println!("content lives at {}", config.content.path);
//! ```

mod content;
mod error;
mod general;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory.
pub const PROJECT_DIR: &str = ".atlas";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AtlasConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be merged or a value is
    /// invalid.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(root).extract()?;
        config.content.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `<root>/.env` (or the nearest `.env` from the current directory)
    /// before building the figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be merged or a value is
    /// invalid.
    pub fn load_with_dotenv(root: &Path) -> Result<Self, ConfigError> {
        Self::load_dotenv(root);
        Self::load(root)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ATLAS_").split("__"))
    }

    /// Path to the project config file under `root`.
    #[must_use]
    pub fn project_config_path(root: &Path) -> PathBuf {
        root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atlas").join("config.toml"))
    }

    /// Load `<root>/.env`, falling back to the nearest `.env` found from the
    /// current directory. Silently does nothing if none exists.
    fn load_dotenv(root: &Path) {
        let env_path = root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
            return;
        }

        let _ = dotenvy::dotenv();
    }
}
