//! Integration tests for the sled-backed record store

use shotmatch::assemble::ProcessedEntry;
use shotmatch::matcher::DuplicatePolicy;
use shotmatch::pass::process_store;
use shotmatch::store::{RecordStore, SledRecordStore};
use shotmatch::types::{FrameRecord, LocationRecord};
use std::path::Path;
use tempfile::TempDir;

/// Records survive closing and reopening the database
#[test]
fn test_collections_persist_across_reopen() {
    let store_dir = TempDir::new().unwrap();

    {
        let store = SledRecordStore::new(store_dir.path()).unwrap();
        store
            .replace_locations(&[
                LocationRecord::new("/hpsans1/production/a"),
                LocationRecord::new("/hpsans1/production/b"),
            ])
            .unwrap();
        store
            .replace_frame_records(&[FrameRecord::new("/baselightfilesystem1/b", vec![5, 6])])
            .unwrap();
        process_store(&store, DuplicatePolicy::default()).unwrap();
        store.flush().unwrap();
    }

    let store = SledRecordStore::new(store_dir.path()).unwrap();
    assert_eq!(store.locations().unwrap().len(), 2);
    assert_eq!(store.frame_records().unwrap()[0].frames, vec![5, 6]);

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].location, "/hpsans1/production/b");
    assert!(!entries[1].is_matched());
}

/// More than 255 records keep insertion order (keys compare as big-endian)
#[test]
fn test_order_preserved_past_single_byte_keys() {
    let store_dir = TempDir::new().unwrap();
    let store = SledRecordStore::new(store_dir.path()).unwrap();

    let records: Vec<LocationRecord> = (0..300)
        .map(|i| LocationRecord::new(format!("/hpsans1/production/shot{}", i)))
        .collect();
    store.replace_locations(&records).unwrap();

    assert_eq!(store.locations().unwrap(), records);
}

/// Replacing with a shorter list leaves no stale tail behind
#[test]
fn test_replace_shrinks_collection() {
    let store_dir = TempDir::new().unwrap();
    let store = SledRecordStore::new(store_dir.path()).unwrap();

    let many: Vec<ProcessedEntry> = (0..5)
        .map(|i| ProcessedEntry::unmatched(&format!("/loc/{}", i)))
        .collect();
    store.replace_entries(&many).unwrap();
    store
        .replace_entries(&[ProcessedEntry::unmatched("/only")])
        .unwrap();

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].location, "/only");
}

/// Thumbnails attach by position and out-of-range indexes report false
#[test]
fn test_set_thumbnail_by_index() {
    let store_dir = TempDir::new().unwrap();
    let store = SledRecordStore::new(store_dir.path()).unwrap();
    store
        .replace_entries(&[
            ProcessedEntry::from_run("/hpsans1/production/a", &[100]).unwrap(),
            ProcessedEntry::unmatched("/hpsans1/production/b"),
        ])
        .unwrap();

    assert!(store.set_thumbnail(0, Path::new("/tmp/thumb_0000.jpg")).unwrap());
    assert!(!store.set_thumbnail(7, Path::new("/tmp/thumb_0007.jpg")).unwrap());

    let entries = store.entries().unwrap();
    assert_eq!(
        entries[0].thumbnail.as_deref(),
        Some(Path::new("/tmp/thumb_0000.jpg"))
    );
    assert_eq!(entries[1].thumbnail, None);
}
