//! Config loader: builds a `ShotmatchConfig` from layered sources.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::ShotmatchConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, user config file, workspace
    /// `config/config.toml`, workspace `config/{SHOTMATCH_ENV}.toml`,
    /// `SHOTMATCH__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<ShotmatchConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: ShotmatchConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<ShotmatchConfig, ConfigError> {
        builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Path of the user-level config file, if a home directory is known.
    pub fn user_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
