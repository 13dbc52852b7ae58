use super::*;
use std::fs;
use std::path::{Path, PathBuf};

fn file(name: &str, size: u64) -> DirEntry {
    DirEntry::new(name, EntryKind::File, size)
}

fn dir(name: &str) -> DirEntry {
    DirEntry::new(name, EntryKind::Directory, 0)
}

#[test]
fn ensure_root_accepts_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    ensure_root(temp.path()).expect("existing directory is a valid root");
}

#[test]
fn ensure_root_rejects_missing_path() {
    let error = ensure_root(Path::new("/nonexistent/path/for/walk"))
        .expect_err("missing root should fail");
    assert!(error.is_root_missing());
    assert_eq!(error.path(), Path::new("/nonexistent/path/for/walk"));
}

#[test]
fn ensure_root_rejects_regular_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("file.txt");
    fs::write(&file, b"contents").expect("write");

    let error = ensure_root(&file).expect_err("file root should fail");
    assert!(error.is_root_missing());
}

#[test]
fn read_sorted_orders_entries_by_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("b.txt"), b"bb").expect("write b");
    fs::write(temp.path().join("a.txt"), b"a").expect("write a");
    fs::create_dir(temp.path().join("c")).expect("mkdir c");

    let entries = read_sorted(temp.path()).expect("read level");
    let names: Vec<_> = entries.iter().map(|e| e.name().to_os_string()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c"]);

    assert_eq!(entries[0].kind(), EntryKind::File);
    assert_eq!(entries[0].size(), 1);
    assert_eq!(entries[1].size(), 2);
    assert!(entries[2].is_dir());
}

#[test]
fn read_sorted_fails_for_missing_directory() {
    let error = read_sorted(Path::new("/nonexistent/path/for/walk"))
        .expect_err("missing directory should fail");
    assert!(matches!(error.kind(), WalkErrorKind::ReadDir { .. }));
}

#[test]
fn pair_level_matches_entries_by_name() {
    let original = vec![file("a.txt", 3), dir("dir1")];
    let compared = vec![file("a.txt", 3), file("b.txt", 2), dir("dir1")];

    let pairs = pair_level(Path::new(""), &original, compared);
    assert_eq!(pairs.len(), 3);

    assert_eq!(pairs[0].path(), Path::new("a.txt"));
    assert_eq!(pairs[0].original().expect("a.txt pairs").name(), "a.txt");

    assert_eq!(pairs[1].path(), Path::new("b.txt"));
    assert!(pairs[1].original().is_none());

    assert_eq!(pairs[2].path(), Path::new("dir1"));
    assert!(pairs[2].original().expect("dir1 pairs").is_dir());
}

#[test]
fn pair_level_yields_no_candidate_when_compared_sorts_first() {
    let original = vec![file("b.txt", 1)];
    let compared = vec![file("a.txt", 1), file("b.txt", 1)];

    let pairs = pair_level(Path::new(""), &original, compared);
    assert!(pairs[0].original().is_none());
    assert_eq!(pairs[1].original().expect("b.txt pairs").name(), "b.txt");
}

#[test]
fn pair_level_retains_stale_candidate_for_unmatched_names() {
    // "a.txt" consumes the cursor past "a"; the classifier is responsible for
    // rejecting the stale candidate by name.
    let original = vec![file("a", 1)];
    let compared = vec![file("a.txt", 1)];

    let pairs = pair_level(Path::new(""), &original, compared);
    assert_eq!(pairs[0].original().expect("candidate retained").name(), "a");
}

#[test]
fn pair_level_ignores_entries_only_in_original() {
    let original = vec![file("a.txt", 1), file("b.txt", 1), file("c.txt", 1)];
    let compared = vec![file("b.txt", 1)];

    let pairs = pair_level(Path::new(""), &original, compared);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].original().expect("b.txt pairs").name(), "b.txt");
}

#[test]
fn pair_level_last_duplicate_wins() {
    // Duplicate names cannot occur in one real listing; the merge keeps the
    // last one scanned.
    let original = vec![file("a.txt", 1), file("a.txt", 9)];
    let compared = vec![file("a.txt", 9)];

    let pairs = pair_level(Path::new(""), &original, compared);
    assert_eq!(pairs[0].original().expect("a.txt pairs").size(), 9);
}

#[test]
fn pair_level_prefixes_relative_directory() {
    let original = vec![file("inner.txt", 1)];
    let compared = vec![file("inner.txt", 1)];

    let pairs = pair_level(Path::new("dir1/dir2"), &original, compared);
    assert_eq!(pairs[0].path(), PathBuf::from("dir1/dir2/inner.txt"));
}

#[test]
fn pair_level_empty_level_yields_nothing() {
    let pairs = pair_level(Path::new(""), &[], Vec::new());
    assert!(pairs.is_empty());
}
