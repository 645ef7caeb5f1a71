//! Timecode conversion at a fixed 24 fps, non-drop.

use crate::range::FrameRange;
use crate::types::FrameNumber;

/// Frames per second.
pub const FPS: FrameNumber = 24;

const FRAMES_PER_MINUTE: FrameNumber = FPS * 60;
const FRAMES_PER_HOUR: FrameNumber = FRAMES_PER_MINUTE * 60;

/// Separator between the two ends of a range timecode.
pub const RANGE_SEPARATOR: &str = " to ";

/// Render a frame number as `HH:MM:SS:FF`.
///
/// Hours are not wrapped; past 99 hours the field simply widens.
pub fn frame_to_timecode(frame: FrameNumber) -> String {
    let frames = frame % FPS;
    let seconds = (frame / FPS) % 60;
    let minutes = (frame / FRAMES_PER_MINUTE) % 60;
    let hours = frame / FRAMES_PER_HOUR;
    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, frames)
}

/// Render a frame range as timecode: `"<start> to <end>"` for a span, a single
/// timecode for a single frame.
pub fn range_to_timecode(range: &FrameRange) -> String {
    match *range {
        FrameRange::Single(frame) => frame_to_timecode(frame),
        FrameRange::Span { start, end } => format!(
            "{}{}{}",
            frame_to_timecode(start),
            RANGE_SEPARATOR,
            frame_to_timecode(end)
        ),
    }
}

/// Parse `HH:MM:SS:FF` into seconds.
///
/// Returns `None` unless there are exactly four colon-separated unsigned
/// integer fields, or when the total overflows. Signed fields are rejected.
pub fn timecode_to_seconds(timecode: &str) -> Option<f64> {
    let mut fields = [0u64; 4];
    let mut parts = timecode.split(':');
    for field in fields.iter_mut() {
        *field = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }

    let [hours, minutes, seconds, frames] = fields;
    let whole = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    Some(whole as f64 + frames as f64 / FPS as f64)
}

/// The starting timecode of a rendered range timecode.
pub fn start_timecode(range_timecode: &str) -> &str {
    range_timecode
        .split_once(RANGE_SEPARATOR)
        .map_or(range_timecode, |(start, _)| start)
        .trim()
}
