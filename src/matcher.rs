//! Frame-set matching
//!
//! Joins location-reference records to Baselight frame lists through their
//! common path.

use crate::error::MatchError;
use crate::path::normalize;
use crate::types::{FrameNumber, FrameRecord, LocationRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// What to do when two frame records normalize to the same common path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one; the collision is reported.
    #[default]
    LastWriteWins,
    /// The pass fails on the first collision.
    Reject,
}

/// A common path claimed by more than one frame record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateKey {
    pub common_path: String,
    pub replaced: String,
    pub kept: String,
}

/// One location's join result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Join<'a> {
    /// Frames are ascending with repeats removed.
    Matched {
        location: &'a LocationRecord,
        frames: Vec<FrameNumber>,
    },
    Unmatched { location: &'a LocationRecord },
}

impl<'a> Join<'a> {
    pub fn location(&self) -> &'a LocationRecord {
        match *self {
            Join::Matched { location, .. } | Join::Unmatched { location } => location,
        }
    }
}

/// Joins in location input order, with counts.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome<'a> {
    pub joins: Vec<Join<'a>>,
    pub matched: usize,
    pub unmatched: usize,
    pub duplicates: Vec<DuplicateKey>,
}

struct FrameEntry<'a> {
    source: &'a str,
    frames: Vec<FrameNumber>,
}

/// Build the common-path lookup from frame records.
///
/// Frame lists are sorted and repeated frames dropped, so a repeat never
/// splits a consecutive run.
fn build_frame_map<'a>(
    frame_records: &'a [FrameRecord],
    policy: DuplicatePolicy,
    duplicates: &mut Vec<DuplicateKey>,
) -> Result<HashMap<&'a str, FrameEntry<'a>>, MatchError> {
    let mut map: HashMap<&str, FrameEntry> = HashMap::with_capacity(frame_records.len());

    for record in frame_records {
        let Some(common_path) = normalize(&record.path) else {
            debug!(path = %record.path, "Frame record has no common path");
            continue;
        };

        let mut frames = record.frames.clone();
        frames.sort_unstable();
        frames.dedup();

        let entry = FrameEntry {
            source: &record.path,
            frames,
        };
        if let Some(previous) = map.insert(common_path, entry) {
            if policy == DuplicatePolicy::Reject {
                return Err(MatchError::DuplicateCommonPath {
                    common_path: common_path.to_string(),
                    first: previous.source.to_string(),
                    second: record.path.clone(),
                });
            }
            warn!(
                common_path,
                replaced = previous.source,
                kept = %record.path,
                "Duplicate common path in frame records, keeping the later record"
            );
            duplicates.push(DuplicateKey {
                common_path: common_path.to_string(),
                replaced: previous.source.to_string(),
                kept: record.path.clone(),
            });
        }
    }

    Ok(map)
}

/// Join each location to the frame list sharing its common path.
pub fn match_records<'a>(
    locations: &'a [LocationRecord],
    frame_records: &[FrameRecord],
    policy: DuplicatePolicy,
) -> Result<MatchOutcome<'a>, MatchError> {
    let mut outcome = MatchOutcome::default();
    let frame_map = build_frame_map(frame_records, policy, &mut outcome.duplicates)?;

    for location in locations {
        let found = normalize(&location.path).and_then(|common| frame_map.get(common));
        match found {
            Some(entry) => {
                outcome.matched += 1;
                outcome.joins.push(Join::Matched {
                    location,
                    frames: entry.frames.clone(),
                });
            }
            None => {
                debug!(path = %location.path, "No frame data for location");
                outcome.unmatched += 1;
                outcome.joins.push(Join::Unmatched { location });
            }
        }
    }

    Ok(outcome)
}
