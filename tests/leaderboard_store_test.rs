//! Tests for the file-backed leaderboard store.

use std::fs;

use noughts_and_crosses::{Leaderboard, LeaderboardError, LeaderboardStore};
use tempfile::TempDir;

/// Returns the temp dir (must stay in scope to keep the files alive) and a
/// store pointing at a not-yet-created file inside it.
fn setup_store() -> (TempDir, LeaderboardStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = LeaderboardStore::new(dir.path().join("leaderboard.txt"));
    (dir, store)
}

fn read_json(store: &LeaderboardStore) -> serde_json::Value {
    let text = fs::read_to_string(store.path()).expect("Read failed");
    serde_json::from_str(&text).expect("Stored file is not JSON")
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, store) = setup_store();
    let board = store.load().expect("Load failed");
    assert!(board.is_empty());
}

#[test]
fn test_record_into_absent_file() {
    let (_dir, store) = setup_store();
    store.record("Ann", 3).expect("Record failed");
    assert_eq!(read_json(&store), serde_json::json!({ "Ann": 3 }));
}

#[test]
fn test_record_overwrites_existing_name() {
    let (_dir, store) = setup_store();
    store.record("Ann", 3).expect("Record failed");
    store.record("Bob", 1).expect("Record failed");
    store.record("Ann", -2).expect("Record failed");

    let board = store.load().expect("Load failed");
    assert_eq!(board.len(), 2);
    assert_eq!(board.get("Ann"), Some(-2));
    assert_eq!(board.get("Bob"), Some(1));
    assert_eq!(read_json(&store), serde_json::json!({ "Ann": -2, "Bob": 1 }));
}

#[test]
fn test_loads_file_written_elsewhere() {
    let (_dir, store) = setup_store();
    fs::write(store.path(), r#"{"Zed": 5, "Amy": 0}"#).expect("Write failed");
    let board = store.load().expect("Load failed");
    let entries: Vec<_> = board.iter().collect();
    assert_eq!(entries, vec![("Amy", 0), ("Zed", 5)]);
}

#[test]
fn test_malformed_file_is_format_error() {
    let (_dir, store) = setup_store();
    for content in ["not json", "[1, 2]", r#"{"Ann": "three"}"#, ""] {
        fs::write(store.path(), content).expect("Write failed");
        assert!(
            matches!(store.load(), Err(LeaderboardError::Format { .. })),
            "{content:?} should be rejected"
        );
    }
}

#[test]
fn test_failed_record_leaves_file_untouched() {
    let (_dir, store) = setup_store();
    fs::write(store.path(), "{broken").expect("Write failed");
    assert!(store.record("Ann", 3).is_err());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "{broken");
}

#[test]
fn test_save_replaces_whole_file() {
    let (_dir, store) = setup_store();
    store.record("Old", 9).expect("Record failed");

    let mut fresh = Leaderboard::new();
    fresh.insert("New", 1);
    store.save(&fresh).expect("Save failed");

    assert_eq!(read_json(&store), serde_json::json!({ "New": 1 }));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = LeaderboardStore::new(dir.path().join("no_such_dir").join("leaderboard.txt"));
    assert!(matches!(
        store.save(&Leaderboard::new()),
        Err(LeaderboardError::Io { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_record_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = setup_store();
    for mode in [0o644, 0o640] {
        fs::write(store.path(), "{}").expect("Write failed");
        fs::set_permissions(store.path(), fs::Permissions::from_mode(mode))
            .expect("Chmod failed");

        store.record("Ann", 3).expect("Record failed");

        let after = fs::metadata(store.path()).expect("Stat failed").permissions();
        assert_eq!(after.mode() & 0o777, mode);
        assert_eq!(read_json(&store), serde_json::json!({ "Ann": 3 }));
    }
}

#[cfg(unix)]
#[test]
fn test_new_file_follows_default_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, store) = setup_store();
    let sibling = dir.path().join("plain.txt");
    fs::write(&sibling, "{}").expect("Write failed");

    store.record("Ann", 3).expect("Record failed");

    let mode = |path: &std::path::Path| {
        fs::metadata(path).expect("Stat failed").permissions().mode() & 0o777
    };
    assert_eq!(mode(store.path()), mode(&sibling));
}
