//! Common test utilities for integration tests.
//!
//! Fixtures build small directory trees on the real filesystem inside a
//! temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree.
pub struct Fixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Root of the fixture.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the fixture as a string.
    pub fn root_str(&self) -> &str {
        self.root().to_str().expect("temp dir is not UTF-8")
    }

    /// Creates a file (and its parent directories) relative to the root.
    pub fn file(self, relative: &str) -> Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&path, relative).expect("failed to write file");
        self
    }

    /// Creates a directory relative to the root.
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root().join(relative)).expect("failed to create dir");
        self
    }

    /// Absolute path of `relative` inside the fixture, as a string.
    pub fn path(&self, relative: &str) -> String {
        self.join(relative)
            .into_os_string()
            .into_string()
            .expect("fixture path is not UTF-8")
    }

    /// Absolute path of `relative` inside the fixture.
    pub fn join(&self, relative: &str) -> PathBuf {
        let mut path = self.root().to_path_buf();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }

    /// Whether names in this fixture are case-sensitive.
    ///
    /// Case-insensitive filesystems find wrongly-cased paths in the direct
    /// check, so corrected-casing assertions only hold on case-sensitive ones.
    pub fn is_case_sensitive(&self) -> bool {
        let probe = self.root().join("case_probe");
        fs::write(&probe, "").expect("failed to write probe");
        let sensitive = !self.root().join("CASE_PROBE").exists();
        fs::remove_file(&probe).expect("failed to remove probe");
        sensitive
    }
}
