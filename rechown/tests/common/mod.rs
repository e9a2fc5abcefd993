//! Common test utilities for integration tests.
//!
//! Provides a small on-disk hierarchy with symlinks and helpers for running
//! ownership changes against a recording backend.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use rechown::change::{change_ownership, RecordingBackend};
use rechown::{ChangeOptions, LogLevel, Logger, OwnershipTarget};
use tempfile::TempDir;

/// A temporary hierarchy:
///
/// ```text
/// <tmp>/
///   tree/
///     a.txt
///     sub/
///       b.txt
///     to_outside -> <tmp>/outside
///     to_a -> <tmp>/tree/a.txt
///   outside/
///     c.txt
///   tree_link -> <tmp>/tree
/// ```
pub struct TreeFixture {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates the hierarchy.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temporary directory");
        let base = temp_dir.path();

        fs::create_dir_all(base.join("tree/sub")).unwrap();
        fs::create_dir_all(base.join("outside")).unwrap();
        fs::write(base.join("tree/a.txt"), b"a").unwrap();
        fs::write(base.join("tree/sub/b.txt"), b"b").unwrap();
        fs::write(base.join("outside/c.txt"), b"c").unwrap();
        symlink(base.join("outside"), base.join("tree/to_outside")).unwrap();
        symlink(base.join("tree/a.txt"), base.join("tree/to_a")).unwrap();
        symlink(base.join("tree"), base.join("tree_link")).unwrap();

        Self { temp_dir }
    }

    /// Path relative to the temporary base directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// The hierarchy root.
    pub fn tree(&self) -> PathBuf {
        self.path("tree")
    }
}

/// Runs a change over `paths` with a recording backend, returning the
/// overall result and the report output.
#[allow(dead_code)]
pub fn run_change(
    paths: &[PathBuf],
    target: OwnershipTarget,
    options: &ChangeOptions,
    backend: &RecordingBackend,
) -> (bool, String) {
    let mut out = Vec::new();
    let ok = change_ownership(
        paths,
        target,
        options,
        backend,
        &mut out,
        Logger::new(LogLevel::Quiet),
    );
    (ok, String::from_utf8(out).expect("report output is UTF-8"))
}

/// Whether `path` was passed to the backend.
#[allow(dead_code)]
pub fn touched(backend: &RecordingBackend, path: &Path) -> bool {
    backend.paths().iter().any(|p| p == path)
}
