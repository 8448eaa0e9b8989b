//! Shared test helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Create a temp dir and write files. Returns (guard, root). Paths are relative to root; parent dirs are created.
pub fn project(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
    }
    (dir, root)
}

/// Glob pattern rooted at `root` (root is escaped so temp dir names never act as wildcards).
pub fn pattern(root: &Path, rest: &str) -> String {
    format!("{}/{}", glob::Pattern::escape(&root.to_string_lossy()), rest)
}

/// Sorted file names of a list of source records.
pub fn fullnames(files: &[fuf::SourceFile]) -> Vec<String> {
    let mut names: Vec<_> = files.iter().map(|f| f.fullname.clone()).collect();
    names.sort();
    names
}
