//! Input record types shared across ingest, matching, and storage.

use serde::{Deserialize, Serialize};

/// Frame number within a shot. Frames are counted from zero at 24 fps.
pub type FrameNumber = u64;

/// One path reported by the location-reference (Xytech) listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub path: String,
}

impl LocationRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// One path from the Baselight listing and the frames reported against it.
///
/// `frames` keeps the order and multiplicity of the source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub path: String,
    pub frames: Vec<FrameNumber>,
}

impl FrameRecord {
    pub fn new(path: impl Into<String>, frames: Vec<FrameNumber>) -> Self {
        Self {
            path: path.into(),
            frames,
        }
    }
}
