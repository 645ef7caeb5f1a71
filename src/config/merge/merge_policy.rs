//! Merge rules: defaults first, later sources override earlier ones.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("storage.store_path", ".shotmatch/store")?
        .set_default("matching.duplicate_policy", "last_write_wins")?
        .set_default("thumbnails.enabled", true)?
        .set_default("thumbnails.ffmpeg_path", "ffmpeg")?
        .set_default("thumbnails.size", "96x74")?
        .set_default("thumbnails.timeout_secs", 30)?
        .set_default("report.output_dir", ".")
}
