//! Path normalization
//!
//! Facility paths carry a storage-specific root (`/hpsans<N>/production/` on the
//! location-reference side, `/baselightfilesystem<N>/` on the grading side). The
//! remainder after that root is the common path both listings agree on, and is
//! the join key between them.

use regex::Regex;
use std::sync::LazyLock;

static LOCATION_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^/hpsans\d+/production/(.+)").unwrap());

static BASELIGHT_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^/baselightfilesystem\d+/(.+)").unwrap());

static LOCATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^/hpsans\d+/.+").unwrap());

/// Extract the root-independent suffix of a facility path.
///
/// The location-reference root is tried first, then the Baselight root.
/// Returns `None` for paths under neither root; that is an expected outcome,
/// not an error.
pub fn normalize(path: &str) -> Option<&str> {
    LOCATION_ROOT
        .captures(path)
        .or_else(|| BASELIGHT_ROOT.captures(path))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether a location-reference line names a path under an `/hpsans<N>/` root.
pub fn is_location_path(line: &str) -> bool {
    LOCATION_LINE.is_match(line)
}
