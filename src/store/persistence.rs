//! Persistence layer for the record store

use crate::assemble::ProcessedEntry;
use crate::error::StorageError;
use crate::store::RecordStore;
use crate::types::{FrameRecord, LocationRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

const TREE_LOCATIONS: &str = "locations";
const TREE_FRAME_RECORDS: &str = "frame_records";
const TREE_PROCESSED: &str = "processed";

/// Sled-based implementation of RecordStore
///
/// Each collection lives in its own tree, keyed by big-endian sequence number
/// so iteration returns records in insertion order.
pub struct SledRecordStore {
    db: sled::Db,
    locations: sled::Tree,
    frame_records: sled::Tree,
    processed: sled::Tree,
}

impl SledRecordStore {
    /// Open (or create) a SledRecordStore at the given directory
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to open sled database: {}", e),
            ))
        })?;
        Self::from_db(db)
    }

    /// Build a store over an already-open database
    pub fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let locations = db.open_tree(TREE_LOCATIONS)?;
        let frame_records = db.open_tree(TREE_FRAME_RECORDS)?;
        let processed = db.open_tree(TREE_PROCESSED)?;
        Ok(Self {
            db,
            locations,
            frame_records,
            processed,
        })
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

fn sequence_key(index: usize) -> [u8; 8] {
    (index as u64).to_be_bytes()
}

/// Replace a tree's contents in one atomic batch: every existing key is
/// removed and the new records inserted.
fn replace_tree<T: Serialize>(tree: &sled::Tree, records: &[T]) -> Result<(), StorageError> {
    let mut batch = sled::Batch::default();

    for key in tree.iter().keys() {
        batch.remove(key?);
    }
    for (index, record) in records.iter().enumerate() {
        let value = bincode::serialize(record)?;
        batch.insert(&sequence_key(index)[..], value);
    }

    tree.apply_batch(batch)?;
    Ok(())
}

fn read_tree<T: DeserializeOwned>(tree: &sled::Tree) -> Result<Vec<T>, StorageError> {
    let mut records = Vec::new();
    for item in tree.iter() {
        let (_, value) = item?;
        records.push(bincode::deserialize(&value)?);
    }
    Ok(records)
}

impl RecordStore for SledRecordStore {
    fn replace_locations(&self, records: &[LocationRecord]) -> Result<(), StorageError> {
        replace_tree(&self.locations, records)
    }

    fn locations(&self) -> Result<Vec<LocationRecord>, StorageError> {
        read_tree(&self.locations)
    }

    fn replace_frame_records(&self, records: &[FrameRecord]) -> Result<(), StorageError> {
        replace_tree(&self.frame_records, records)
    }

    fn frame_records(&self) -> Result<Vec<FrameRecord>, StorageError> {
        read_tree(&self.frame_records)
    }

    fn replace_entries(&self, entries: &[ProcessedEntry]) -> Result<(), StorageError> {
        replace_tree(&self.processed, entries)
    }

    fn entries(&self) -> Result<Vec<ProcessedEntry>, StorageError> {
        read_tree(&self.processed)
    }

    fn set_thumbnail(&self, index: usize, thumbnail: &Path) -> Result<bool, StorageError> {
        let key = sequence_key(index);
        let Some(raw) = self.processed.get(key)? else {
            return Ok(false);
        };

        let mut entry: ProcessedEntry = bincode::deserialize(&raw)?;
        entry.thumbnail = Some(thumbnail.to_path_buf());
        self.processed.insert(key, bincode::serialize(&entry)?)?;
        Ok(true)
    }
}
