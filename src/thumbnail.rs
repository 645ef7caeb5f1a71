//! Thumbnail extraction
//!
//! Stills are pulled from a reference video at each entry's first timecode.
//! The extraction tool is injected through [`FrameExtractor`]; every failure is
//! local to its entry and never aborts the run.

use crate::assemble::ProcessedEntry;
use crate::error::ExtractError;
use crate::timecode::{start_timecode, timecode_to_seconds};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::str::FromStr;
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};

/// Default bound on a single extraction.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Output image size, written `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ThumbnailSize {
    fn default() -> Self {
        Self {
            width: 96,
            height: 74,
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for ThumbnailSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Invalid thumbnail size {:?} (expected WIDTHxHEIGHT)", s))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| format!("Invalid thumbnail dimension {:?} in {:?}", v, s))
        };
        Ok(Self {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

/// Capability to render one still image from the reference video.
#[async_trait]
pub trait FrameExtractor: Send + Sync {
    /// Write the frame at `seconds` into the video to `output`, scaled to `size`.
    async fn extract(
        &self,
        seconds: f64,
        size: ThumbnailSize,
        output: &Path,
    ) -> Result<(), ExtractError>;
}

/// Extracts stills by running `ffmpeg` under a timeout.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    program: PathBuf,
    video: PathBuf,
    timeout: Duration,
}

impl FfmpegExtractor {
    pub fn new(program: impl Into<PathBuf>, video: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            video: video.into(),
            timeout,
        }
    }

    pub fn video(&self) -> &Path {
        &self.video
    }
}

#[async_trait]
impl FrameExtractor for FfmpegExtractor {
    async fn extract(
        &self,
        seconds: f64,
        size: ThumbnailSize,
        output: &Path,
    ) -> Result<(), ExtractError> {
        let child = Command::new(&self.program)
            .arg("-ss")
            .arg(seconds.to_string())
            .arg("-i")
            .arg(&self.video)
            .args(["-vframes", "1", "-s"])
            .arg(size.to_string())
            .arg("-y")
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    ExtractError::ToolMissing(self.program.display().to_string())
                }
                _ => ExtractError::Io(e),
            })?;

        // On timeout the child is dropped, which kills it.
        let result = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ExtractError::Timeout(self.timeout))??;

        if !result.status.success() {
            return Err(ExtractError::NonZeroExit {
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        if !output.exists() {
            return Err(ExtractError::MissingOutput(output.to_path_buf()));
        }
        Ok(())
    }
}

/// What happened to one entry.
#[derive(Debug)]
pub enum ThumbnailOutcome {
    Generated {
        index: usize,
        path: PathBuf,
    },
    Skipped {
        index: usize,
        reason: String,
    },
    Failed {
        index: usize,
        timecode: String,
        error: ExtractError,
    },
}

/// Per-entry outcomes of one thumbnail run.
#[derive(Debug, Default)]
pub struct ThumbnailReport {
    pub outcomes: Vec<ThumbnailOutcome>,
}

impl ThumbnailReport {
    pub fn generated(&self) -> usize {
        self.count(|o| matches!(o, ThumbnailOutcome::Generated { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ThumbnailOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ThumbnailOutcome::Failed { .. }))
    }

    /// `(entry index, image path)` for every generated thumbnail.
    pub fn generated_paths(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.outcomes.iter().filter_map(|o| match o {
            ThumbnailOutcome::Generated { index, path } => Some((*index, path.as_path())),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&ThumbnailOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// File name for the thumbnail of the entry at `index`.
pub fn thumbnail_file_name(index: usize) -> String {
    format!("thumb_{:04}.jpg", index)
}

/// Extract one thumbnail per entry, sequentially, at each entry's first
/// timecode. Entries without timecodes, or whose timecode does not parse, are
/// skipped.
pub async fn generate_thumbnails(
    entries: &[ProcessedEntry],
    extractor: &dyn FrameExtractor,
    size: ThumbnailSize,
    output_dir: &Path,
) -> ThumbnailReport {
    let mut report = ThumbnailReport::default();
    let total = entries.len();

    for (index, entry) in entries.iter().enumerate() {
        let Some(range_timecode) = entry.timecodes.first() else {
            report.outcomes.push(ThumbnailOutcome::Skipped {
                index,
                reason: "no timecode".to_string(),
            });
            continue;
        };

        let timecode = start_timecode(range_timecode);
        let Some(seconds) = timecode_to_seconds(timecode) else {
            warn!(index, timecode, "Invalid timecode, skipping thumbnail");
            report.outcomes.push(ThumbnailOutcome::Skipped {
                index,
                reason: format!("invalid timecode {:?}", timecode),
            });
            continue;
        };

        let path = output_dir.join(thumbnail_file_name(index));
        match extractor.extract(seconds, size, &path).await {
            Ok(()) => {
                info!("[{}/{}] Generated thumbnail for {}", index + 1, total, timecode);
                report
                    .outcomes
                    .push(ThumbnailOutcome::Generated { index, path });
            }
            Err(error) => {
                warn!("[{}/{}] Failed to generate thumbnail for {}: {}", index + 1, total, timecode, error);
                report.outcomes.push(ThumbnailOutcome::Failed {
                    index,
                    timecode: timecode.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        generated = report.generated(),
        failed = report.failed(),
        skipped = report.skipped(),
        "Thumbnail generation complete"
    );
    report
}
