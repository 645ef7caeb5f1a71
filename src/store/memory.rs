//! In-memory record store, used in tests and dry runs.

use crate::assemble::ProcessedEntry;
use crate::error::StorageError;
use crate::store::RecordStore;
use crate::types::{FrameRecord, LocationRecord};
use parking_lot::RwLock;
use std::path::Path;

#[derive(Default)]
struct Collections {
    locations: Vec<LocationRecord>,
    frame_records: Vec<FrameRecord>,
    entries: Vec<ProcessedEntry>,
}

#[derive(Default)]
pub struct MemoryRecordStore {
    inner: RwLock<Collections>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with input collections.
    pub fn with_inputs(locations: Vec<LocationRecord>, frame_records: Vec<FrameRecord>) -> Self {
        Self {
            inner: RwLock::new(Collections {
                locations,
                frame_records,
                entries: Vec::new(),
            }),
        }
    }
}

impl RecordStore for MemoryRecordStore {
    fn replace_locations(&self, records: &[LocationRecord]) -> Result<(), StorageError> {
        self.inner.write().locations = records.to_vec();
        Ok(())
    }

    fn locations(&self) -> Result<Vec<LocationRecord>, StorageError> {
        Ok(self.inner.read().locations.clone())
    }

    fn replace_frame_records(&self, records: &[FrameRecord]) -> Result<(), StorageError> {
        self.inner.write().frame_records = records.to_vec();
        Ok(())
    }

    fn frame_records(&self) -> Result<Vec<FrameRecord>, StorageError> {
        Ok(self.inner.read().frame_records.clone())
    }

    fn replace_entries(&self, entries: &[ProcessedEntry]) -> Result<(), StorageError> {
        self.inner.write().entries = entries.to_vec();
        Ok(())
    }

    fn entries(&self) -> Result<Vec<ProcessedEntry>, StorageError> {
        Ok(self.inner.read().entries.clone())
    }

    fn set_thumbnail(&self, index: usize, thumbnail: &Path) -> Result<bool, StorageError> {
        let mut inner = self.inner.write();
        match inner.entries.get_mut(index) {
            Some(entry) => {
                entry.thumbnail = Some(thumbnail.to_path_buf());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
