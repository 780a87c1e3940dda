//! Integration tests for dirwalk


use dirwalk::{Callbacks, DirectoryWalker, NoopVisitor, WalkError};
use harness::{TestTree, run_dirwalk};

#[test]
fn test_default_path_sums_counts() {
    let tree = TestTree::with_counts();

    let (stdout, stderr, code) = run_dirwalk(tree.path(), &[]);
    assert_eq!(code, 0, "dirwalk should succeed: {}", stderr);
    assert_eq!(stdout.trim(), "7");
}

#[test]
fn test_explicit_path() {
    let tree = TestTree::new();
    tree.add_file("data/x/count", "10");
    tree.add_file("data/y/z/count", "32");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &["data"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "42");
}

#[test]
fn test_missing_directory_exits_with_error() {
    let tree = TestTree::new();

    let (stdout, stderr, code) = run_dirwalk(tree.path(), &["missing_dir"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty(), "nothing should be printed on stdout: {}", stdout);
    assert!(
        stderr.contains("folder: missing_dir not found"),
        "error should name the path: {}",
        stderr
    );
}

#[test]
fn test_default_path_missing() {
    let tree = TestTree::new();

    let (_stdout, stderr, code) = run_dirwalk(tree.path(), &[]);
    assert_eq!(code, 1);
    assert!(stderr.contains("public/test"), "{}", stderr);
}

#[test]
fn test_no_recursive_flag() {
    let tree = TestTree::new();
    tree.add_file("root/count", "5");
    tree.add_file("root/sub/count", "100");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &["root", "--no-recursive"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn test_exclude_flag_skips_subtree() {
    let tree = TestTree::with_counts();
    tree.add_file("public/test/vendor/deep/count", "1000");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &["-x", "vendor"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "7");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1007");
}

#[test]
fn test_name_flag() {
    let tree = TestTree::with_counts();

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &["--name", "notcount"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "99");
}

#[test]
fn test_json_output() {
    let tree = TestTree::with_counts();

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &["--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["total"], "7");
    assert_eq!(value["files"], 2);
    assert_eq!(value["root"], "public/test");
}

#[test]
fn test_scale_flag() {
    let tree = TestTree::new();
    tree.add_file("public/test/a/count", "1.25");
    tree.add_file("public/test/b/count", "2.5");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "3");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &["--scale", "2"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "3.75");
}

#[test]
fn test_fractions_truncated_on_every_addition() {
    let tree = TestTree::new();
    tree.add_file("public/test/a/count", "0.5");
    tree.add_file("public/test/b/count", "0.5");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &[]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0");

    let (stdout, _stderr, code) = run_dirwalk(tree.path(), &["--scale", "1"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1.0");
}

#[test]
fn test_library_walk_without_callbacks() {
    let tree = TestTree::with_counts();
    let result = DirectoryWalker::new().walk(tree.path().join("public/test"), true, &mut NoopVisitor);
    assert!(result.is_ok());
}

#[test]
fn test_library_walk_collects_names_with_closures() {
    let tree = TestTree::with_counts();
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    let mut callbacks = Callbacks::<WalkError>::new()
        .on_directory(|e| {
            dirs.push(e.name().to_string());
            Ok(())
        })
        .on_file(|e| {
            files.push(e.name().to_string());
            Ok(())
        });
    DirectoryWalker::new()
        .walk(tree.path().join("public/test"), true, &mut callbacks)
        .unwrap();
    drop(callbacks);

    dirs.sort();
    files.sort();
    assert_eq!(dirs, vec!["a", "b", "c"]);
    assert_eq!(files, vec!["count", "count", "notcount"]);
}
