//! Workspace config file source: `config/config.toml`, then `config/<SHOTMATCH_ENV>.toml`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment selecting the profile file layered over `config/config.toml`.
pub const PROFILE_ENV_VAR: &str = "SHOTMATCH_ENV";

const DEFAULT_PROFILE: &str = "development";

/// Candidate workspace files for `profile`, lowest precedence first.
pub fn workspace_config_paths(workspace_root: &Path, profile: &str) -> [PathBuf; 2] {
    let config_dir = workspace_root.join("config");
    [
        config_dir.join("config.toml"),
        config_dir.join(format!("{}.toml", profile)),
    ]
}

/// Add whichever workspace config files exist to the builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let profile = std::env::var(PROFILE_ENV_VAR).unwrap_or_else(|_| DEFAULT_PROFILE.to_string());

    let builder = workspace_config_paths(workspace_root, &profile)
        .into_iter()
        .fold(builder, |builder, path| {
            if path.is_file() {
                debug!(config_path = %path.display(), "Layering workspace configuration");
                builder.add_source(File::from(path).required(true))
            } else {
                debug!(config_path = %path.display(), "No workspace configuration file");
                builder
            }
        });

    Ok(builder)
}
