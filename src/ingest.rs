//! Ingest
//!
//! Line-oriented parsers for the two facility listings. Lines that do not
//! qualify are skipped, never reported as errors.

use crate::error::ApiError;
use crate::path::is_location_path;
use crate::types::{FrameNumber, FrameRecord, LocationRecord};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Parse a location-reference listing.
///
/// A line qualifies when it names a path under an `/hpsans<N>/` root. Only the
/// line terminator (`\n` or `\r\n`) is stripped; qualifying lines are
/// deduplicated by exact text and keep their first-seen order.
pub fn parse_locations(text: &str) -> Vec<LocationRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for line in text.lines() {
        if !is_location_path(line) {
            continue;
        }
        if seen.insert(line) {
            records.push(LocationRecord::new(line));
        }
    }

    debug!(locations = records.len(), "Parsed location-reference listing");
    records
}

/// Parse a Baselight frame listing.
///
/// Each non-blank line is `<path> <frame> <frame> ...`. A line with no frame
/// tokens is kept with an empty frame list. Tokens that are not decimal frame
/// numbers are dropped; the rest of the line is kept.
pub fn parse_frame_records(text: &str) -> Vec<FrameRecord> {
    let mut records = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(path) = tokens.next() else {
            continue;
        };

        let frames: Vec<FrameNumber> = tokens
            .filter_map(|token| match token.parse::<FrameNumber>() {
                Ok(frame) => Some(frame),
                Err(_) => {
                    debug!(line = line_no + 1, token, "Skipping non-numeric frame token");
                    None
                }
            })
            .collect();

        records.push(FrameRecord::new(path, frames));
    }

    debug!(records = records.len(), "Parsed Baselight listing");
    records
}

/// Read and parse a location-reference listing from disk.
pub fn read_locations(path: &Path) -> Result<Vec<LocationRecord>, ApiError> {
    let text = read_input(path)?;
    Ok(parse_locations(&text))
}

/// Read and parse a Baselight frame listing from disk.
pub fn read_frame_records(path: &Path) -> Result<Vec<FrameRecord>, ApiError> {
    let text = read_input(path)?;
    Ok(parse_frame_records(&text))
}

fn read_input(path: &Path) -> Result<String, ApiError> {
    std::fs::read_to_string(path).map_err(|source| ApiError::InputError {
        path: path.to_path_buf(),
        source,
    })
}
