//! Result assembly
//!
//! Turns joins into processed entries: one per consecutive run of a matched
//! location, one placeholder per unmatched location, ordered by first frame.

use crate::matcher::Join;
use crate::range::{encode, segment, FrameRange};
use crate::timecode::range_to_timecode;
use crate::types::FrameNumber;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordering key for processed entries. Every `Matched` key sorts before
/// `Unmatched`; matched keys order by frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Matched(FrameNumber),
    Unmatched,
}

/// One output row.
///
/// `frame_ranges[i]` and `timecodes[i]` always describe the same range.
/// Overlapping padded ranges from neighbouring runs are kept as separate
/// entries, not merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEntry {
    pub location: String,
    pub frame_ranges: Vec<String>,
    pub timecodes: Vec<String>,
    pub first_frame: SortKey,
    #[serde(default)]
    pub thumbnail: Option<PathBuf>,
}

impl ProcessedEntry {
    /// Entry for one consecutive run of a matched location.
    pub fn from_run(location: &str, run: &[FrameNumber]) -> Option<Self> {
        let first = *run.first()?;
        let padded = FrameRange::from(encode(run)?.pad());

        Some(Self {
            location: location.to_string(),
            frame_ranges: vec![padded.to_string()],
            timecodes: vec![range_to_timecode(&padded)],
            first_frame: SortKey::Matched(first),
            thumbnail: None,
        })
    }

    /// Placeholder entry for a location without frame data.
    pub fn unmatched(location: &str) -> Self {
        Self {
            location: location.to_string(),
            frame_ranges: Vec::new(),
            timecodes: Vec::new(),
            first_frame: SortKey::Unmatched,
            thumbnail: None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self.first_frame, SortKey::Matched(_))
    }

    /// First frame of the unpadded run, `None` when unmatched.
    pub fn first_frame(&self) -> Option<FrameNumber> {
        match self.first_frame {
            SortKey::Matched(frame) => Some(frame),
            SortKey::Unmatched => None,
        }
    }

    /// Frame ranges joined by a single space.
    pub fn frames_text(&self) -> String {
        self.frame_ranges.join(" ")
    }

    /// Timecodes joined by a single space.
    pub fn timecode_text(&self) -> String {
        self.timecodes.join(" ")
    }
}

/// Build processed entries from joins and order them by first frame.
///
/// The sort is stable: entries sharing a key keep join order, so unmatched
/// locations stay in input order after all matched entries.
pub fn assemble(joins: &[Join<'_>]) -> Vec<ProcessedEntry> {
    let mut entries = Vec::new();

    for join in joins {
        match join {
            Join::Matched { location, frames } => {
                entries.extend(
                    segment(frames)
                        .into_iter()
                        .filter_map(|run| ProcessedEntry::from_run(&location.path, run)),
                );
            }
            Join::Unmatched { location } => {
                entries.push(ProcessedEntry::unmatched(&location.path));
            }
        }
    }

    entries.sort_by_key(|entry| entry.first_frame);
    entries
}
