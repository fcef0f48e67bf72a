use std::sync::Arc;

use super::*;
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn shared(storage: &MemoryStorage) -> SharedStorage {
    Arc::new(storage.clone())
}

// =============================================================
// Update
// =============================================================

#[test]
fn update_replace_ignores_current_value() {
    assert_eq!(Update::Replace(5).resolve(&1), 5);
}

#[test]
fn update_apply_derives_from_current_value() {
    assert_eq!(Update::apply(|n: &i32| n + 1).resolve(&41), 42);
}

#[test]
fn update_from_value_is_replace() {
    let update: Update<i32> = 7.into();
    assert!(matches!(update, Update::Replace(7)));
}

#[test]
fn update_debug_hides_closure() {
    assert_eq!(format!("{:?}", Update::apply(|n: &i32| *n)), "Apply(..)");
    assert_eq!(format!("{:?}", Update::Replace(3)), "Replace(3)");
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_missing_key_uses_initial_value() {
    let storage = MemoryStorage::new();
    let cell = PersistedCell::load(shared(&storage), "nums", vec![9_u32]);
    assert_eq!(cell.get(), &vec![9]);
    assert_eq!(cell.key(), "nums");
}

#[test]
fn load_does_not_write_initial_value() {
    let storage = MemoryStorage::new();
    let _cell = PersistedCell::load(shared(&storage), "nums", vec![9_u32]);
    assert_eq!(storage.peek("nums"), None);
}

#[test]
fn load_malformed_json_falls_back_to_initial_value() {
    let storage = MemoryStorage::new();
    storage.set_item("nums", "[1, 2,").unwrap();
    let cell = PersistedCell::load(shared(&storage), "nums", Vec::<u32>::new());
    assert!(cell.get().is_empty());
}

#[test]
fn load_disabled_storage_falls_back_to_initial_value() {
    let storage = MemoryStorage::disabled();
    let cell = PersistedCell::load(shared(&storage), "nums", vec![1_u32]);
    assert_eq!(cell.into_inner(), vec![1]);
}

// =============================================================
// Set
// =============================================================

#[test]
fn set_replace_updates_memory_and_storage() {
    let storage = MemoryStorage::new();
    let mut cell = PersistedCell::load(shared(&storage), "nums", Vec::<u32>::new());
    cell.set(vec![1, 2]).unwrap();
    assert_eq!(cell.get(), &vec![1, 2]);
    assert_eq!(storage.peek("nums").as_deref(), Some("[1,2]"));
}

#[test]
fn set_apply_uses_latest_value() {
    let storage = MemoryStorage::new();
    let mut cell = PersistedCell::load(shared(&storage), "count", 0_i64);
    cell.set(Update::apply(|n: &i64| n + 1)).unwrap();
    cell.set(Update::apply(|n: &i64| n + 1)).unwrap();
    assert_eq!(*cell.get(), 2);
    assert_eq!(storage.peek("count").as_deref(), Some("2"));
}

#[test]
fn set_round_trips_through_new_cell() {
    let storage = MemoryStorage::new();
    let written = vec!["a".to_owned(), "b".to_owned()];
    let mut first = PersistedCell::load(shared(&storage), "words", Vec::new());
    first.set(written.clone()).unwrap();

    let second = PersistedCell::load(shared(&storage), "words", Vec::<String>::new());
    assert_eq!(second.get(), &written);
}

#[test]
fn set_write_failure_keeps_memory_update() {
    let storage = MemoryStorage::new();
    let mut cell = PersistedCell::load(shared(&storage), "nums", vec![1_u32]);
    storage.set_disabled(true);

    let result = cell.set(vec![1, 2, 3]);
    assert!(matches!(result, Err(StorageError::Unavailable(_))));
    assert_eq!(cell.get(), &vec![1, 2, 3]);
    assert_eq!(storage.peek("nums"), None);
}

#[test]
fn set_quota_failure_leaves_previous_snapshot_in_storage() {
    let storage = MemoryStorage::with_quota(16);
    let mut cell = PersistedCell::load(shared(&storage), "nums", Vec::<u32>::new());
    cell.set(vec![1]).unwrap();

    let result = cell.set(vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(matches!(result, Err(StorageError::QuotaExceeded { .. })));
    assert_eq!(cell.get().len(), 7);
    assert_eq!(storage.peek("nums").as_deref(), Some("[1]"));
}

#[test]
fn set_next_successful_write_resynchronizes_storage() {
    let storage = MemoryStorage::new();
    let mut cell = PersistedCell::load(shared(&storage), "nums", Vec::<u32>::new());
    storage.set_disabled(true);
    assert!(cell.set(vec![1]).is_err());
    storage.set_disabled(false);
    cell.set(Update::apply(|v: &Vec<u32>| {
        let mut next = v.clone();
        next.push(2);
        next
    }))
    .unwrap();
    assert_eq!(storage.peek("nums").as_deref(), Some("[1,2]"));
}

#[test]
fn two_cells_on_same_key_last_write_wins() {
    let storage = MemoryStorage::new();
    let mut tab_a = PersistedCell::load(shared(&storage), "nums", Vec::<u32>::new());
    let mut tab_b = PersistedCell::load(shared(&storage), "nums", Vec::<u32>::new());
    tab_a.set(vec![1]).unwrap();
    tab_b.set(vec![2]).unwrap();

    assert_eq!(tab_a.get(), &vec![1]);
    assert_eq!(storage.peek("nums").as_deref(), Some("[2]"));
}
