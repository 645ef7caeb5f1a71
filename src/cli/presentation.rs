//! CLI presentation: text and json formatters per command.

use crate::assemble::ProcessedEntry;
use crate::error::ApiError;
use crate::pass::PassOutcome;
use crate::thumbnail::{ThumbnailOutcome, ThumbnailReport};
use serde_json::json;
use std::path::Path;

fn to_json(value: &serde_json::Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::ReportError(e.to_string()))
}

pub fn format_import_summary(locations: usize, frame_records: usize) -> String {
    format!(
        "Import complete:\n  Location records: {}\n  Frame records: {}",
        locations, frame_records
    )
}

pub fn format_pass_summary(outcome: &PassOutcome) -> String {
    let mut s = format!(
        "Processing complete:\n  Matched locations: {}\n  Unmatched locations: {}\n  Entries: {}",
        outcome.matched,
        outcome.unmatched,
        outcome.total_entries()
    );
    if !outcome.duplicates.is_empty() {
        s.push_str(&format!(
            "\n\nDuplicate common paths ({}):",
            outcome.duplicates.len()
        ));
        for dup in &outcome.duplicates {
            s.push_str(&format!(
                "\n  - {}: kept {}, replaced {}",
                dup.common_path, dup.kept, dup.replaced
            ));
        }
    }
    s
}

pub fn format_thumbnail_summary(report: &ThumbnailReport) -> String {
    let mut s = format!(
        "Thumbnails: {} generated, {} failed, {} skipped",
        report.generated(),
        report.failed(),
        report.skipped()
    );
    for outcome in &report.outcomes {
        if let ThumbnailOutcome::Failed {
            index,
            timecode,
            error,
        } = outcome
        {
            s.push_str(&format!("\n  - entry {} at {}: {}", index, timecode, error));
        }
    }
    s
}

fn thumbnail_json(report: Option<&ThumbnailReport>) -> serde_json::Value {
    match report {
        Some(report) => json!({
            "generated": report.generated(),
            "failed": report.failed(),
            "skipped": report.skipped(),
        }),
        None => serde_json::Value::Null,
    }
}

/// `entries` are the stored entries after thumbnails were attached.
pub fn format_process_json(
    outcome: &PassOutcome,
    entries: &[ProcessedEntry],
    thumbnails: Option<&ThumbnailReport>,
) -> Result<String, ApiError> {
    to_json(&json!({
        "matched": outcome.matched,
        "unmatched": outcome.unmatched,
        "total_entries": outcome.total_entries(),
        "duplicates": outcome.duplicates,
        "entries": entries,
        "thumbnails": thumbnail_json(thumbnails),
    }))
}

pub fn format_entries_json(entries: &[ProcessedEntry]) -> Result<String, ApiError> {
    to_json(&json!({ "entries": entries }))
}

pub fn format_export_result(path: &Path, rows: usize) -> String {
    format!("Exported {} entries to {}", rows, path.display())
}
