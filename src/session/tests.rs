//! Tests for session state management

use super::*;
use std::time::Duration;
use tempfile::TempDir;

const MAX_AGE: Duration = STATE_VALIDITY;

fn manager() -> SessionManager<MemorySlot> {
    SessionManager::new(MemorySlot::new())
}

// ============================================================================
// Save / restore round trips
// ============================================================================

#[test]
fn test_restore_within_window() {
    let manager = manager();
    manager.save_at("go", 2, 0);

    let restored = manager.restore_at(MAX_AGE, 200_000).unwrap();
    assert_eq!(restored.term, "go");
    assert_eq!(restored.page, 2);
}

#[test]
fn test_restore_expired() {
    let manager = manager();
    manager.save_at("go", 2, 0);

    assert!(manager.restore_at(MAX_AGE, 400_000).is_none());
}

#[test]
fn test_restore_at_exact_cutoff_expires() {
    let manager = manager();
    manager.save_at("go", 2, 0);

    // The boundary value is already stale
    assert!(manager.restore_at(MAX_AGE, 300_000).is_none());
    assert!(manager.restore_at(MAX_AGE, 299_999).is_some());
}

#[test]
fn test_restore_without_save() {
    let manager = manager();
    assert!(manager.restore_at(MAX_AGE, 0).is_none());
}

#[test]
fn test_save_overwrites_previous_entry() {
    let manager = manager();
    manager.save_at("first", 1, 0);
    manager.save_at("second", 7, 1_000);

    let restored = manager.restore_at(MAX_AGE, 2_000).unwrap();
    assert_eq!(restored.term, "second");
    assert_eq!(restored.page, 7);
}

#[test]
fn test_restore_retains_entry() {
    let manager = manager();
    manager.save_at("go", 2, 0);

    assert!(manager.restore_at(MAX_AGE, 100_000).is_some());
    // A second return within the window restores the same state
    let again = manager.restore_at(MAX_AGE, 200_000).unwrap();
    assert_eq!(again.term, "go");
    assert_eq!(again.page, 2);
}

#[test]
fn test_clear_drops_entry() {
    let manager = manager();
    manager.save_at("go", 2, 0);
    manager.clear();

    assert!(manager.restore_at(MAX_AGE, 1).is_none());
}

#[test]
fn test_empty_term_is_a_valid_position() {
    let manager = manager();
    manager.save_at("", 3, 0);

    let restored = manager.restore_at(MAX_AGE, 1_000).unwrap();
    assert_eq!(restored.term, "");
    assert_eq!(restored.page, 3);
}

// ============================================================================
// Corruption handling
// ============================================================================

#[test]
fn test_malformed_entry_is_discarded_silently() {
    let slot = MemorySlot::new();
    slot.write("{not json").unwrap();

    let manager = SessionManager::new(slot);
    assert!(manager.restore_at(MAX_AGE, 0).is_none());
}

#[test]
fn test_entry_with_missing_fields_is_discarded() {
    let slot = MemorySlot::new();
    slot.write(r#"{"term": "go"}"#).unwrap();

    let manager = SessionManager::new(slot);
    assert!(manager.restore_at(MAX_AGE, 0).is_none());
}

#[test]
fn test_clock_skew_reads_as_fresh() {
    let manager = manager();
    manager.save_at("go", 2, 10_000);

    // Saved "in the future" relative to restore time
    assert!(manager.restore_at(MAX_AGE, 5_000).is_some());
}

// ============================================================================
// File slot
// ============================================================================

#[test]
fn test_file_slot_roundtrip() {
    let dir = TempDir::new().unwrap();
    let slot = FileSlot::in_dir(dir.path());
    assert!(slot.path().ends_with("blog_search_state.json"));

    let manager = SessionManager::new(slot);
    manager.save_at("persisted", 4, 0);

    let restored = manager.restore_at(MAX_AGE, 1_000).unwrap();
    assert_eq!(restored.term, "persisted");
    assert_eq!(restored.page, 4);
}

#[test]
fn test_file_slot_missing_file_reads_as_absent() {
    let dir = TempDir::new().unwrap();
    let slot = FileSlot::new(dir.path().join("missing.json"));

    assert!(slot.read().is_none());
    let manager = SessionManager::new(slot);
    assert!(manager.restore_at(MAX_AGE, 0).is_none());
}

#[test]
fn test_file_slot_clear() {
    let dir = TempDir::new().unwrap();
    let slot = FileSlot::new(dir.path().join("state.json"));
    slot.write("data").unwrap();
    assert!(slot.read().is_some());

    slot.clear();
    assert!(slot.read().is_none());
}

#[test]
fn test_save_to_unwritable_slot_is_swallowed() {
    // Path whose parent directory does not exist
    let slot = FileSlot::new("/nonexistent-dir-postboard/state.json");
    let manager = SessionManager::new(slot);

    // Must not panic or surface the error
    manager.save_at("go", 1, 0);
    assert!(manager.restore_at(MAX_AGE, 0).is_none());
}
