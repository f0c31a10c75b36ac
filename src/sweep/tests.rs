use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::config::Sweep;
use crate::logging::Verbosity;

// Helper functions

fn sweep(root: &Path, recurse: bool) -> super::SweepStats {
    Sweep::builder()
        .root(root)
        .recurse(recurse)
        .verbosity(Verbosity::NONE)
        .build()
        .unwrap()
        .run()
}

fn make_tree(root: &Path, dirs: &[&str], files: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in files {
        fs::write(root.join(file), b"x").unwrap();
    }
}

// Deletion rule tests

#[test]
fn test_empty_root_is_deleted() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    fs::create_dir(&root).unwrap();

    let stats = sweep(&root, false);

    assert!(!root.exists());
    assert_eq!(stats.deleted, 1);
    assert_eq!(stats.ignored, 0);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_directory_with_file_is_ignored() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &[""], &["keep.txt"]);

    for recurse in [false, true] {
        let stats = sweep(&root, recurse);

        assert!(root.exists());
        assert!(root.join("keep.txt").exists());
        assert_eq!(stats.deleted, 0);
        assert_eq!(stats.ignored, 1);
    }
}

#[test]
fn test_cascade_deletes_bottom_up() {
    // root/a/b where b is empty and a contains only b: with recursion the
    // whole chain collapses, root included.
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &["a/b"], &[]);

    let stats = sweep(&root, true);

    assert!(!root.exists());
    assert_eq!(stats.deleted, 3);
    assert_eq!(stats.ignored, 0);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_cascade_stops_at_non_empty_ancestor() {
    // A file beside `a` keeps the root alive while a/b still collapse.
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &["a/b"], &["anchor.txt"]);

    let stats = sweep(&root, true);

    assert!(root.exists());
    assert!(!root.join("a").exists());
    assert_eq!(stats.deleted, 2);
    assert_eq!(stats.ignored, 1);
}

#[test]
fn test_no_cascade_without_recursion() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &["a/b"], &[]);

    let stats = sweep(&root, false);

    // Only the root node is evaluated; the nested directories are untouched.
    assert!(root.join("a/b").exists());
    assert_eq!(stats.deleted, 0);
    assert_eq!(stats.ignored, 1);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_file_deep_in_tree_preserves_its_ancestors() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &["a/b/c", "empty1", "empty2/inner"], &["a/b/c/data.bin"]);

    let stats = sweep(&root, true);

    // The chain holding the file survives; the empty branches collapse.
    assert!(root.join("a/b/c/data.bin").exists());
    assert!(!root.join("empty1").exists());
    assert!(!root.join("empty2").exists());
    assert_eq!(stats.deleted, 3);
    assert_eq!(stats.ignored, 4);
    assert_eq!(stats.errors, 0);
}

// Error handling tests

#[test]
fn test_missing_root_counts_one_error() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("does-not-exist");

    let stats = sweep(&root, true);

    assert_eq!(stats.errors, 1);
    assert_eq!(stats.deleted, 0);
    assert_eq!(stats.ignored, 0);
}

#[test]
fn test_root_is_a_file_counts_one_error() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("file.txt");
    fs::write(&root, b"not a directory").unwrap();

    let stats = sweep(&root, true);

    assert!(root.exists());
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.deleted, 0);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_counts_error_and_walk_continues() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &["locked", "open"], &[]);

    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not restrict root; skip where the setup has no
    // effect (e.g. containers running as uid 0).
    if fs::read_dir(&locked).is_ok() {
        return;
    }

    let stats = sweep(&root, true);

    // Restore permissions so TempDir can clean up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    // The locked child fails, the sibling is still swept, and the root is
    // ignored because the locked directory remains.
    assert_eq!(stats.errors, 1);
    assert!(!root.join("open").exists());
    assert_eq!(stats.deleted, 1);
    assert_eq!(stats.ignored, 1);
}

// Counter tests

#[test]
fn test_idempotence_second_run_deletes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &["a/b", "c"], &["keep.txt"]);

    let first = sweep(&root, true);
    assert_eq!(first.deleted, 3);

    let second = sweep(&root, true);
    assert_eq!(second.deleted, 0);
    assert_eq!(second.ignored, 1);
    assert_eq!(second.errors, 0);
}

#[test]
fn test_suppressed_counts_filtered_events() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    fs::create_dir(&root).unwrap();

    // Mask excludes INFORMATION: BEGIN and FINISHED for the single node are
    // suppressed, the DELETED event prints.
    let stats = Sweep::builder()
        .root(&root)
        .verbosity(Verbosity::DELETION)
        .build()
        .unwrap()
        .run();

    assert_eq!(stats.deleted, 1);
    assert_eq!(stats.suppressed, 2);
}

#[test]
fn test_all_verbosity_suppresses_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    make_tree(&root, &[""], &["keep.txt"]);

    let stats = Sweep::builder()
        .root(&root)
        .verbosity(Verbosity::ALL)
        .build()
        .unwrap()
        .run();

    assert_eq!(stats.ignored, 1);
    assert_eq!(stats.suppressed, 0);
}

#[test]
fn test_builder_requires_root() {
    assert!(Sweep::builder().recurse(true).build().is_err());
}
