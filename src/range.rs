//! Frame ranges
//!
//! Segmentation of sorted frame lists into consecutive runs, the compact
//! `"<n>"` / `"<first>-<last>"` range encoding, and symmetric padding.

use crate::error::RangeError;
use crate::types::FrameNumber;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Frames added on each side of a run.
pub const PADDING: FrameNumber = 48;

/// Lowest frame a padded range may start at.
pub const MIN_PADDED_FRAME: FrameNumber = 1;

/// Split an ascending frame list into maximal consecutive runs.
///
/// A run continues while each frame is exactly one past the previous one.
/// Every input frame lands in exactly one run, in input order. Unsorted input
/// is not rejected; it just produces runs that follow the input order.
pub fn segment(sorted_frames: &[FrameNumber]) -> Vec<&[FrameNumber]> {
    let mut runs = Vec::new();
    let mut start = 0;

    for i in 1..sorted_frames.len() {
        if sorted_frames[i] != sorted_frames[i - 1].wrapping_add(1) {
            runs.push(&sorted_frames[start..i]);
            start = i;
        }
    }
    if start < sorted_frames.len() {
        runs.push(&sorted_frames[start..]);
    }

    runs
}

/// Encode a consecutive run as a frame range. Returns `None` for an empty run.
pub fn encode(run: &[FrameNumber]) -> Option<FrameRange> {
    match run {
        [] => None,
        [single] => Some(FrameRange::Single(*single)),
        [first, .., last] => Some(FrameRange::Span {
            start: *first,
            end: *last,
        }),
    }
}

/// A compact frame range: one frame, or an inclusive span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameRange {
    Single(FrameNumber),
    Span { start: FrameNumber, end: FrameNumber },
}

impl FrameRange {
    pub fn start(&self) -> FrameNumber {
        match *self {
            FrameRange::Single(frame) => frame,
            FrameRange::Span { start, .. } => start,
        }
    }

    pub fn end(&self) -> FrameNumber {
        match *self {
            FrameRange::Single(frame) => frame,
            FrameRange::Span { end, .. } => end,
        }
    }

    /// Extend by [`PADDING`] frames on each side, clamping the start at
    /// [`MIN_PADDED_FRAME`].
    pub fn pad(&self) -> PaddedRange {
        PaddedRange {
            start: self.start().saturating_sub(PADDING).max(MIN_PADDED_FRAME),
            end: self.end().saturating_add(PADDING),
        }
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameRange::Single(frame) => write!(f, "{}", frame),
            FrameRange::Span { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

impl FromStr for FrameRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RangeError::Empty);
        }
        match s.split_once('-') {
            Some((start, end)) => {
                let start = parse_frame(start)?;
                let end = parse_frame(end)?;
                if start > end {
                    return Err(RangeError::Inverted { start, end });
                }
                Ok(FrameRange::Span { start, end })
            }
            None => Ok(FrameRange::Single(parse_frame(s)?)),
        }
    }
}

fn parse_frame(s: &str) -> Result<FrameNumber, RangeError> {
    s.parse()
        .map_err(|_| RangeError::InvalidNumber(s.to_string()))
}

/// A run after padding. Always rendered in range form, even for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedRange {
    pub start: FrameNumber,
    pub end: FrameNumber,
}

impl From<PaddedRange> for FrameRange {
    fn from(padded: PaddedRange) -> Self {
        FrameRange::Span {
            start: padded.start,
            end: padded.end,
        }
    }
}

impl fmt::Display for PaddedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Pad an encoded range string (`"<n>"` or `"<a>-<b>"`).
pub fn pad(range: &str) -> Result<PaddedRange, RangeError> {
    Ok(range.parse::<FrameRange>()?.pad())
}
