//! Matching pass
//!
//! One full, idempotent reconciliation: match, assemble, and (for store-backed
//! runs) replace the processed collection. Nothing is written unless the whole
//! outcome was computed.

use crate::assemble::{assemble, ProcessedEntry};
use crate::error::{ApiError, MatchError};
use crate::matcher::{match_records, DuplicateKey, DuplicatePolicy};
use crate::store::RecordStore;
use crate::types::{FrameRecord, LocationRecord};
use serde::Serialize;
use tracing::info;

/// Result of one matching pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassOutcome {
    /// Entries in first-frame order, unmatched last.
    pub entries: Vec<ProcessedEntry>,
    /// Locations that found frame data.
    pub matched: usize,
    /// Locations without frame data.
    pub unmatched: usize,
    /// Common paths claimed by more than one frame record.
    pub duplicates: Vec<DuplicateKey>,
}

impl PassOutcome {
    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }
}

/// Run the matching pass over in-memory inputs.
pub fn run_pass(
    locations: &[LocationRecord],
    frame_records: &[FrameRecord],
    policy: DuplicatePolicy,
) -> Result<PassOutcome, MatchError> {
    let matched = match_records(locations, frame_records, policy)?;
    let entries = assemble(&matched.joins);

    let outcome = PassOutcome {
        entries,
        matched: matched.matched,
        unmatched: matched.unmatched,
        duplicates: matched.duplicates,
    };

    info!(
        matched = outcome.matched,
        unmatched = outcome.unmatched,
        total_entries = outcome.total_entries(),
        duplicates = outcome.duplicates.len(),
        "Matching pass complete"
    );

    Ok(outcome)
}

/// Run the matching pass against a store and replace its processed collection.
pub fn process_store(
    store: &dyn RecordStore,
    policy: DuplicatePolicy,
) -> Result<PassOutcome, ApiError> {
    let locations = store.locations()?;
    let frame_records = store.frame_records()?;

    let outcome = run_pass(&locations, &frame_records, policy)?;
    store.replace_entries(&outcome.entries)?;

    Ok(outcome)
}
