//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the root of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and its parents) with no contents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a tree `width` directories wide and `depth` levels deep, with one
    /// `count` file holding `1` in every directory.
    pub fn populate(&self, width: usize, depth: usize) -> usize {
        fn fill(dir: &Path, width: usize, depth: usize) -> usize {
            fs::write(dir.join("count"), "1").expect("Failed to write file");
            fs::write(dir.join("notes.txt"), "not a number").expect("Failed to write file");
            if depth == 0 {
                return 1;
            }
            let mut files = 1;
            for i in 0..width {
                let child = dir.join(format!("dir{}", i));
                fs::create_dir(&child).expect("Failed to create dir");
                files += fill(&child, width, depth - 1);
            }
            files
        }
        fill(self.dir.path(), width, depth)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
