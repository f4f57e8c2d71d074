// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;
use yare::parameterized;

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set("a", "1").unwrap();
    assert_eq!(other.get("a").unwrap().as_deref(), Some("1"));
    other.remove("a").unwrap();
    assert!(store.is_empty());
}

#[test]
fn memory_store_keeps_insertion_order() {
    let store = MemoryStore::new();
    store.set("b", "1").unwrap();
    store.set("a", "2").unwrap();
    store.set("b", "3").unwrap();
    assert_eq!(store.keys().unwrap(), vec!["b", "a"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn file_store_round_trips_values() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("state"));

    assert_eq!(store.get("missing").unwrap(), None);
    store.set("Job Monitor0_State", r#"{"filters":[]}"#).unwrap();
    assert_eq!(store.get("Job Monitor0_State").unwrap().as_deref(), Some(r#"{"filters":[]}"#));
    assert_eq!(store.keys().unwrap(), vec!["Job Monitor0_State"]);

    store.remove("Job Monitor0_State").unwrap();
    store.remove("Job Monitor0_State").unwrap();
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn file_store_without_directory_has_no_keys() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never-created"));
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn file_store_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set("layout", "[]").unwrap();
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["layout.json"]);
}

#[test]
fn backed_up_keys_rotate_previous_versions() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path()).backup("layout");
    let path = store.path_for("layout");

    for round in 1..=5 {
        store.set("layout", &format!("[{round}]")).unwrap();
    }

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[5]");
    assert_eq!(std::fs::read_to_string(path.with_extension("bak")).unwrap(), "[4]");
    assert_eq!(std::fs::read_to_string(path.with_extension("bak.2")).unwrap(), "[3]");
    assert_eq!(std::fs::read_to_string(path.with_extension("bak.3")).unwrap(), "[2]");
    assert!(!path.with_extension("bak.4").exists());
}

#[test]
fn other_keys_are_not_backed_up() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path()).backup("layout");
    store.set("x_State", "1").unwrap();
    store.set("x_State", "2").unwrap();
    assert!(!store.path_for("x_State").with_extension("bak").exists());
}

#[parameterized(
    plain = { "layout", "layout" },
    space = { "Job Monitor0_State", "Job%20Monitor0_State" },
    dot_and_slash = { "a.b/c", "a%2Eb%2Fc" },
    non_ascii = { "é", "%C3%A9" },
)]
fn key_encoding(key: &str, file: &str) {
    assert_eq!(encode_key(key), file);
    assert_eq!(decode_key(file).as_deref(), Some(key));
}

#[test]
fn truncated_escape_does_not_decode() {
    assert_eq!(decode_key("abc%2"), None);
    assert_eq!(decode_key("abc%zz"), None);
}
