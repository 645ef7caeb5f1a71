//! Report output: CSV export and terminal tables for processed entries.

use crate::assemble::ProcessedEntry;
use crate::error::ApiError;
use chrono::{DateTime, Local};
use comfy_table::Table;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Report columns, in output order.
pub const REPORT_HEADERS: [&str; 4] = ["Location", "Frames", "Timecode", "Thumbnail"];

/// Timestamped default report file name.
pub fn default_report_name(now: DateTime<Local>) -> String {
    format!("processed_results_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Thumbnail cell: the image path, if one was recorded and still exists.
fn thumbnail_cell(entry: &ProcessedEntry) -> String {
    entry
        .thumbnail
        .as_deref()
        .filter(|p| p.exists())
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// Write entries as CSV, one row per entry, in the order given.
pub fn write_csv<W: Write>(entries: &[ProcessedEntry], writer: W) -> Result<(), ApiError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let to_report_error = |e: csv::Error| ApiError::ReportError(e.to_string());

    csv_writer
        .write_record(REPORT_HEADERS)
        .map_err(to_report_error)?;
    for entry in entries {
        csv_writer
            .write_record([
                entry.location.clone(),
                entry.frames_text(),
                entry.timecode_text(),
                thumbnail_cell(entry),
            ])
            .map_err(to_report_error)?;
    }
    csv_writer
        .flush()
        .map_err(|e| ApiError::ReportError(e.to_string()))?;
    Ok(())
}

/// Write the CSV report to `path`, returning the path written.
pub fn write_csv_report(entries: &[ProcessedEntry], path: &Path) -> Result<PathBuf, ApiError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::ReportError(format!("Failed to create report directory {:?}: {}", parent, e))
        })?;
    }
    let file = std::fs::File::create(path)
        .map_err(|e| ApiError::ReportError(format!("Failed to create {:?}: {}", path, e)))?;
    write_csv(entries, file)?;
    Ok(path.to_path_buf())
}

/// Render entries as a terminal table.
pub fn render_table(entries: &[ProcessedEntry]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(REPORT_HEADERS.to_vec());
    for entry in entries {
        let frames = if entry.frame_ranges.is_empty() {
            "No frames".to_string()
        } else {
            entry.frames_text()
        };
        let timecode = if entry.timecodes.is_empty() {
            "N/A".to_string()
        } else {
            entry.timecode_text()
        };
        let thumbnail = entry
            .thumbnail
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![entry.location.clone(), frames, timecode, thumbnail]);
    }
    table.to_string()
}
