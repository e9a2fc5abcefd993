//! Common test utilities for CLI integration tests.
//!
//! Tests change files to the ids they already have, which never needs
//! privileges, so the suite runs as any user.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::{symlink, MetadataExt};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the rechown binary.
    ///
    /// `RECHOWN_LOG_MODE` is cleared so the caller's environment cannot
    /// change what the tests see on stderr.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rechown").expect("Failed to find rechown binary");
        cmd.env_remove("RECHOWN_LOG_MODE");
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with some content.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, name).expect("Failed to create test file");
        path
    }

    /// Create a symlink named `name` pointing at `target`.
    pub fn create_symlink(&self, target: &Path, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Write a batch script and return its path.
    pub fn write_script(&self, contents: &str) -> PathBuf {
        let path = self.temp_path.join("ownership.script");
        fs::write(&path, contents).expect("Failed to write script");
        path
    }

    /// The `uid:gid` the test process creates files with.
    pub fn own_ids(&self) -> String {
        let meta = fs::metadata(&self.temp_path).expect("Failed to stat temp dir");
        format!("{}:{}", meta.uid(), meta.gid())
    }
}

/// The line `-v` prints for a path.
#[allow(dead_code)]
pub fn report_line(path: &Path, ids: &str) -> String {
    format!("changed ownership of '{}' to {ids}\n", path.display())
}
