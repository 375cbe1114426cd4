//! Common test utilities for CLI integration tests.
//!
//! Every command runs with an empty user configuration directory, the
//! `DETECT_*` variables cleared, and the working directory set to a fresh
//! temporary directory.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated configuration.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join(".detect-config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("detect").expect("Failed to find detect binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("DETECT_NOCASE")
            .env_remove("DETECT_OUTPUT_FORMAT")
            .env_remove("DETECT_LOG_MODE")
            .env_remove("DETECT_CONFIG_DIR");
        cmd
    }

    /// Get a command builder with the config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a file (and its parents) relative to the temp directory.
    pub fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "").expect("Failed to create test file");
        path
    }

    /// Create a directory relative to the temp directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write user config");
    }

    /// Write a project configuration file in the temp directory.
    pub fn write_project_config(&self, name: &str, contents: &str) {
        fs::write(self.temp_path.join(name), contents).expect("Failed to write project config");
    }

    /// Absolute path of `relative` as a string.
    pub fn path_str(&self, relative: &str) -> String {
        self.temp_path
            .join(relative)
            .to_str()
            .expect("temp path is not UTF-8")
            .to_string()
    }

    /// Whether the filesystem under the temp directory is case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        let probe = self.temp_path.join("case_probe");
        fs::write(&probe, "").expect("Failed to write probe");
        let sensitive = !self.temp_path.join("CASE_PROBE").exists();
        fs::remove_file(&probe).expect("Failed to remove probe");
        sensitive
    }
}
