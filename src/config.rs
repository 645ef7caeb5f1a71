//! Configuration System
//!
//! Layered configuration: built-in defaults, the user config file, workspace
//! config files, then `SHOTMATCH__*` environment overrides.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::matcher::DuplicatePolicy;
use crate::thumbnail::ThumbnailSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotmatchConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Record store location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store directory, relative paths resolve against the workspace root
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".shotmatch/store")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

impl StorageConfig {
    /// Resolve the store path against the workspace root
    pub fn resolve_store_path(&self, workspace_root: &Path) -> PathBuf {
        resolve(workspace_root, &self.store_path)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

/// Thumbnail extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Reference video stills are pulled from
    #[serde(default)]
    pub video_path: Option<PathBuf>,

    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,

    /// Output size, `WIDTHxHEIGHT`
    #[serde(default = "default_size")]
    pub size: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Where thumbnails are written (default: a fresh temp directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_ffmpeg_path() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_size() -> String {
    ThumbnailSize::default().to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            video_path: None,
            ffmpeg_path: default_ffmpeg_path(),
            size: default_size(),
            timeout_secs: default_timeout_secs(),
            output_dir: None,
        }
    }
}

impl ThumbnailConfig {
    pub fn size(&self) -> Result<ThumbnailSize, ApiError> {
        self.size.parse().map_err(ApiError::ConfigError)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory for reports written under their default name
    #[serde(default = "default_report_dir")]
    pub output_dir: PathBuf,
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_report_dir(),
        }
    }
}

fn resolve(workspace_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace_root.join(path)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Storage(String),
    Thumbnails(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Storage(msg) => write!(f, "storage: {}", msg),
            ValidationError::Thumbnails(msg) => write!(f, "thumbnails: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ShotmatchConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage.store_path.as_os_str().is_empty() {
            errors.push(ValidationError::Storage("store_path cannot be empty".to_string()));
        }

        if self.thumbnails.timeout_secs == 0 {
            errors.push(ValidationError::Thumbnails(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if let Err(e) = self.thumbnails.size.parse::<ThumbnailSize>() {
            errors.push(ValidationError::Thumbnails(e));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "invalid format {:?} (must be 'text' or 'json')",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding all problems into one `ApiError`
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })
    }
}
