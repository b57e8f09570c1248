//! # tagschema-config
//!
//! Layered configuration loading for tagschema using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TAGSCHEMA_*` prefix, `__` as separator)
//! 2. An explicit TOML file passed by the caller (e.g. `--config`)
//! 3. Project-level `.tagschema/config.toml`
//! 4. User-level `~/.config/tagschema/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `TAGSCHEMA_GENERATOR__NAMING_TAG` -> `generator.naming_tag`,
//! `TAGSCHEMA_OUTPUT__PRETTY` -> `output.pretty`.
//!
//! # Usage
//!
//! ```no_run
//! use tagschema_config::TagSchemaConfig;
//!
//! let config = TagSchemaConfig::load().expect("config");
//! let generator = config.generator.generator();
//! assert_eq!(generator.tag_keys().naming, config.generator.naming_tag);
//! ```

mod error;
mod generator;
mod output;

pub use error::ConfigError;
pub use generator::GeneratorConfig;
pub use output::OutputConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagSchemaConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl TagSchemaConfig {
    /// Load configuration from defaults, the TOML files, and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed, and
    /// `ConfigError::InvalidValue` when the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(None))
    }

    /// Like [`load`](Self::load), with an extra TOML file layered above the
    /// project file.
    ///
    /// # Errors
    ///
    /// As [`load`](Self::load), plus `ConfigError::MissingFile` when `path`
    /// does not name an existing file.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Self::from_figment(Self::figment(Some(path)))
    }

    /// Extract and validate a configuration from any figment.
    ///
    /// # Errors
    ///
    /// As [`load`](Self::load).
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".tagschema/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("TAGSCHEMA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tagschema").join("config.toml"))
    }
}
