//! Error types for the shotmatch reconciliation tool.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
    }
}

impl From<bincode::Error> for StorageError {
    fn from(err: bincode::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Frame-range parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Empty frame range")]
    Empty,

    #[error("Invalid frame number: {0:?}")]
    InvalidNumber(String),

    #[error("Inverted frame range: {start}-{end}")]
    Inverted { start: u64, end: u64 },
}

/// Join-time anomalies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Duplicate common path {common_path:?} (from {first:?} and {second:?})")]
    DuplicateCommonPath {
        common_path: String,
        first: String,
        second: String,
    },
}

/// Per-entry frame extraction failures. Never fatal to a run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Frame extraction tool not found: {0}")]
    ToolMissing(String),

    #[error("Frame extraction exited with status {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("Frame extraction timed out after {0:?}")]
    Timeout(Duration),

    #[error("Frame extraction I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frame extraction produced no output at {0:?}")]
    MissingOutput(PathBuf),
}

/// Caller-facing errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read input {path:?}: {source}")]
    InputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report error: {0}")]
    ReportError(String),

    #[error("Thumbnail error: {0}")]
    ThumbnailError(String),

    #[error("No processed entries found. Run `shotmatch process` first.")]
    NothingProcessed,
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
