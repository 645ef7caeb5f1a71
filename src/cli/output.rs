//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, MatchError};

/// Map domain errors to a single stderr line.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Match(MatchError::DuplicateCommonPath { common_path, .. }) => format!(
            "{}\nHint: set matching.duplicate_policy = \"last_write_wins\" to keep the later record for {:?}",
            e, common_path
        ),
        _ => e.to_string(),
    }
}
