//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::assemble::ProcessedEntry;
use crate::config::{ConfigLoader, ShotmatchConfig};
use crate::error::ApiError;
use crate::ingest::{read_frame_records, read_locations};
use crate::pass::process_store;
use crate::report::{default_report_name, render_table, write_csv_report};
use crate::store::{RecordStore, SledRecordStore};
use crate::thumbnail::{generate_thumbnails, FfmpegExtractor, ThumbnailReport};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{info, info_span, warn};

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_entries_json, format_export_result, format_import_summary, format_pass_summary,
    format_process_json, format_thumbnail_summary,
};

/// Runtime context for CLI execution: workspace, loaded config, and the opened store.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ShotmatchConfig,
    store: SledRecordStore,
}

/// Why thumbnail extraction did or did not run.
enum ThumbnailRun {
    Ran(ThumbnailReport),
    Skipped(String),
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        config.ensure_valid()?;

        let store_path = config.storage.resolve_store_path(&workspace_root);
        std::fs::create_dir_all(&store_path)
            .map_err(|e| ApiError::Storage(crate::error::StorageError::IoError(e)))?;
        let store = SledRecordStore::new(&store_path)?;

        Ok(Self {
            workspace_root,
            config,
            store,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ShotmatchConfig {
        &self.config
    }

    /// The opened record store.
    pub fn store(&self) -> &SledRecordStore {
        &self.store
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!("command", command = command_name(command));
        let _guard = span.enter();

        let result = match command {
            Commands::Import { xytech, baselight } => self.handle_import(xytech, baselight),
            Commands::Process {
                no_thumbnails,
                video,
                format,
            } => self.handle_process(*no_thumbnails, video.as_deref(), format),
            Commands::Export { file } => self.handle_export(file.as_deref()),
            Commands::Show { format } => self.handle_show(format),
        };
        self.store.flush()?;
        result
    }

    fn handle_import(&self, xytech: &Path, baselight: &Path) -> Result<String, ApiError> {
        // Parse both inputs before touching the store.
        let locations = read_locations(xytech)?;
        let frame_records = read_frame_records(baselight)?;

        self.store.replace_locations(&locations)?;
        self.store.replace_frame_records(&frame_records)?;

        info!(
            locations = locations.len(),
            frame_records = frame_records.len(),
            "Inputs imported"
        );
        Ok(format_import_summary(locations.len(), frame_records.len()))
    }

    fn handle_process(
        &self,
        no_thumbnails: bool,
        video: Option<&Path>,
        format: &str,
    ) -> Result<String, ApiError> {
        let outcome = process_store(&self.store, self.config.matching.duplicate_policy)?;

        let thumbnails = if no_thumbnails || !self.config.thumbnails.enabled {
            ThumbnailRun::Skipped("thumbnails disabled".to_string())
        } else {
            self.run_thumbnails(&outcome.entries, video)?
        };

        let entries = self.store.entries()?;
        let report = match &thumbnails {
            ThumbnailRun::Ran(report) => Some(report),
            ThumbnailRun::Skipped(_) => None,
        };

        if format == "json" {
            return format_process_json(&outcome, &entries, report);
        }

        let mut out = format_pass_summary(&outcome);
        out.push_str("\n\n");
        out.push_str(&render_table(&entries));
        match &thumbnails {
            ThumbnailRun::Ran(report) => {
                out.push_str("\n\n");
                out.push_str(&format_thumbnail_summary(report));
            }
            ThumbnailRun::Skipped(reason) => {
                out.push_str(&format!("\n\nThumbnails skipped: {}", reason));
            }
        }
        Ok(out)
    }

    fn run_thumbnails(
        &self,
        entries: &[ProcessedEntry],
        video_override: Option<&Path>,
    ) -> Result<ThumbnailRun, ApiError> {
        let settings = &self.config.thumbnails;
        let video = match video_override {
            Some(path) => path.to_path_buf(),
            None => match settings.video_path {
                Some(ref path) => self.resolve(path),
                None => return Ok(ThumbnailRun::Skipped("no video configured".to_string())),
            },
        };
        if !video.is_file() {
            warn!(video = %video.display(), "Video file not found, skipping thumbnails");
            return Ok(ThumbnailRun::Skipped(format!(
                "video file not found: {}",
                video.display()
            )));
        }

        let output_dir = match settings.output_dir {
            Some(ref dir) => self.resolve(dir),
            None => std::env::temp_dir().join(format!(
                "shotmatch_thumbnails_{}",
                Local::now().format("%Y%m%d_%H%M%S")
            )),
        };
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            ApiError::ThumbnailError(format!(
                "Failed to create thumbnail directory {:?}: {}",
                output_dir, e
            ))
        })?;

        let extractor = FfmpegExtractor::new(&settings.ffmpeg_path, &video, settings.timeout());
        let size = settings.size()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ThumbnailError(format!("Failed to start runtime: {}", e)))?;
        let report =
            runtime.block_on(generate_thumbnails(entries, &extractor, size, &output_dir));

        for (index, path) in report.generated_paths() {
            if !self.store.set_thumbnail(index, path)? {
                warn!(index, "No processed entry for generated thumbnail");
            }
        }
        Ok(ThumbnailRun::Ran(report))
    }

    fn handle_export(&self, file: Option<&Path>) -> Result<String, ApiError> {
        let entries = self.store.entries()?;
        if entries.is_empty() {
            return Err(ApiError::NothingProcessed);
        }

        let path = match file {
            Some(path) => path.to_path_buf(),
            None => self
                .resolve(&self.config.report.output_dir)
                .join(default_report_name(Local::now())),
        };
        let written = write_csv_report(&entries, &path)?;
        info!(path = %written.display(), rows = entries.len(), "Report written");
        Ok(format_export_result(&written, entries.len()))
    }

    fn handle_show(&self, format: &str) -> Result<String, ApiError> {
        let entries = self.store.entries()?;
        if format == "json" {
            return format_entries_json(&entries);
        }
        if entries.is_empty() {
            return Ok("No processed entries. Run `shotmatch process` first.".to_string());
        }
        Ok(render_table(&entries))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const XYTECH: &str = "Producer: Jane\n\
        /hpsans13/production/show/reel1/partA/1920x1080\n\
        /hpsans13/production/show/reel1/partB/1920x1080\n\
        Notes: none\n";
    const BASELIGHT: &str = "/baselightfilesystem1/show/reel1/partA/1920x1080 10 11 12 20\n";

    fn workspace() -> (TempDir, RunContext) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("xytech.txt"), XYTECH).unwrap();
        std::fs::write(dir.path().join("baselight.txt"), BASELIGHT).unwrap();
        let ctx = RunContext::new(dir.path().to_path_buf(), None).unwrap();
        (dir, ctx)
    }

    fn import(dir: &TempDir, ctx: &RunContext) -> String {
        ctx.execute(&Commands::Import {
            xytech: dir.path().join("xytech.txt"),
            baselight: dir.path().join("baselight.txt"),
        })
        .unwrap()
    }

    #[test]
    fn test_import_then_process() {
        let (dir, ctx) = workspace();
        let summary = import(&dir, &ctx);
        assert!(summary.contains("Location records: 2"));
        assert!(summary.contains("Frame records: 1"));

        let out = ctx
            .execute(&Commands::Process {
                no_thumbnails: true,
                video: None,
                format: "text".to_string(),
            })
            .unwrap();
        assert!(out.contains("Matched locations: 1"));
        assert!(out.contains("Thumbnails skipped"));

        let entries = ctx.store().entries().unwrap();
        let ranges: Vec<&str> = entries
            .iter()
            .flat_map(|e| e.frame_ranges.iter().map(String::as_str))
            .collect();
        assert_eq!(ranges, vec!["1-60", "1-68"]);
        assert!(!entries[2].is_matched());
    }

    #[test]
    fn test_missing_video_skips_thumbnails() {
        let (dir, ctx) = workspace();
        import(&dir, &ctx);

        let out = ctx
            .execute(&Commands::Process {
                no_thumbnails: false,
                video: Some(dir.path().join("missing.mov")),
                format: "text".to_string(),
            })
            .unwrap();
        assert!(out.contains("video file not found"));
    }

    #[test]
    fn test_export_requires_processed_entries() {
        let (dir, ctx) = workspace();
        let err = ctx
            .execute(&Commands::Export {
                file: Some(dir.path().join("out.csv")),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::NothingProcessed));
    }

    #[test]
    fn test_export_writes_csv() {
        let (dir, ctx) = workspace();
        import(&dir, &ctx);
        ctx.execute(&Commands::Process {
            no_thumbnails: true,
            video: None,
            format: "json".to_string(),
        })
        .unwrap();

        let path = dir.path().join("report.csv");
        let out = ctx
            .execute(&Commands::Export {
                file: Some(path.clone()),
            })
            .unwrap();
        assert!(out.contains("Exported 3 entries"));
        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.starts_with("Location,Frames,Timecode,Thumbnail"));
    }

    #[test]
    fn test_show_before_processing() {
        let (_dir, ctx) = workspace();
        let out = ctx
            .execute(&Commands::Show {
                format: "text".to_string(),
            })
            .unwrap();
        assert!(out.contains("No processed entries"));
    }
}
