//! Record Store
//!
//! Three collections feed and receive one matching pass: location records,
//! frame records, and processed entries. Each is replaced wholesale, never
//! patched, except for thumbnail paths attached after extraction.

pub mod memory;
pub mod persistence;

pub use memory::MemoryRecordStore;
pub use persistence::SledRecordStore;

use crate::assemble::ProcessedEntry;
use crate::error::StorageError;
use crate::types::{FrameRecord, LocationRecord};
use std::path::Path;

/// Record store interface
pub trait RecordStore {
    /// Clear the location collection and insert `records` in order.
    fn replace_locations(&self, records: &[LocationRecord]) -> Result<(), StorageError>;
    fn locations(&self) -> Result<Vec<LocationRecord>, StorageError>;

    /// Clear the frame record collection and insert `records` in order.
    fn replace_frame_records(&self, records: &[FrameRecord]) -> Result<(), StorageError>;
    fn frame_records(&self) -> Result<Vec<FrameRecord>, StorageError>;

    /// Clear the processed collection and insert `entries` in order.
    fn replace_entries(&self, entries: &[ProcessedEntry]) -> Result<(), StorageError>;

    /// Processed entries in stored (first-frame) order.
    fn entries(&self) -> Result<Vec<ProcessedEntry>, StorageError>;

    /// Attach a thumbnail to the entry at `index`.
    ///
    /// Returns `false` when no entry exists at that position.
    fn set_thumbnail(&self, index: usize, thumbnail: &Path) -> Result<bool, StorageError>;
}
