//! Integration tests for the configuration system

use shotmatch::config::ConfigLoader;
use shotmatch::matcher::DuplicatePolicy;
use shotmatch::thumbnail::ThumbnailSize;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_from_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("shotmatch.toml");

    std::fs::write(
        &config_file,
        r#"
[storage]
store_path = "/var/lib/shotmatch"

[matching]
duplicate_policy = "reject"

[thumbnails]
video_path = "media/reference.mov"
size = "320x240"
timeout_secs = 5

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.storage.store_path, PathBuf::from("/var/lib/shotmatch"));
    assert_eq!(config.matching.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(
        config.thumbnails.video_path,
        Some(PathBuf::from("media/reference.mov"))
    );
    assert_eq!(
        config.thumbnails.size().unwrap(),
        ThumbnailSize {
            width: 320,
            height: 240
        }
    );
    assert_eq!(config.thumbnails.timeout(), Duration::from_secs(5));
    // Untouched keys keep their defaults
    assert!(config.thumbnails.enabled);
    assert_eq!(config.thumbnails.ffmpeg_path, PathBuf::from("ffmpeg"));
    assert_eq!(config.report.output_dir, PathBuf::from("."));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_load_from_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_workspace_config_file_is_layered() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[report]
output_dir = "reports"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.report.output_dir, PathBuf::from("reports"));
    assert_eq!(config.storage.store_path, PathBuf::from(".shotmatch/store"));
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(
        &config_file,
        r#"
[thumbnails]
size = "wide"
timeout_secs = 0
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}
