//! Filesystem access for path resolution.
//!
//! The resolver only ever asks three read-only questions of the filesystem:
//! does a path exist, what entries does a directory hold, and what is the
//! current directory. This module puts those behind the [`FileSystem`] trait
//! so resolution can run against the real OS ([`OsFileSystem`]) or against
//! an in-memory tree with scripted failures ([`MockFileSystem`]).

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::path::convention::PathConvention;
use crate::path::normalize;

/// Read-only filesystem queries used by the resolver.
///
/// Paths are UTF-8 strings in the convention the resolver was built with.
///
/// # Examples
///
/// ```
/// use detect::path::{FileSystem, MockFileSystem, PathConvention};
///
/// let fs = MockFileSystem::new(PathConvention::Posix).with_file("/srv/App.toml");
/// assert!(fs.exists("/srv/App.toml"));
/// assert!(!fs.exists("/srv/app.toml"));
/// assert_eq!(fs.read_dir("/srv").unwrap(), vec!["App.toml".to_string()]);
/// ```
pub trait FileSystem: Send + Sync {
    /// Whether `path` names an existing file or directory.
    fn exists(&self, path: &str) -> bool;

    /// List the entry names of the directory at `path`, in listing order.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist (`PathNotFound`), cannot be
    /// read (`PermissionDenied`), or is not a directory (`NotADirectory`).
    fn read_dir(&self, path: &str) -> Result<Vec<String>>;

    /// The working directory that relative paths are resolved against.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or is
    /// not valid UTF-8.
    fn current_dir(&self) -> Result<String>;
}

/// Production implementation backed by `std::fs`.
///
/// Entry names that are not valid UTF-8 are left out of listings, since they
/// can never match a UTF-8 path segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| Error::from_io(path, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io(path, e))?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::trace!("skipping non-UTF-8 entry {raw:?} in {path}"),
            }
        }
        Ok(names)
    }

    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir()?;
        cwd.into_os_string()
            .into_string()
            .map_err(|raw| Error::InvalidPath {
                path: raw.into(),
                reason: "current directory is not valid UTF-8".to_string(),
            })
    }
}

/// In-memory filesystem for tests.
///
/// Names are case-sensitive and listings come back in insertion order.
/// Directories can be marked as denied, in which case listing them or
/// anything beneath them fails with `PermissionDenied`, and entries beneath
/// them no longer report as existing. The mock counts `read_dir` calls so
/// tests can check how much listing a resolution performed.
///
/// # Examples
///
/// ```
/// use detect::path::{FileSystem, MockFileSystem, PathConvention};
///
/// let fs = MockFileSystem::new(PathConvention::Posix)
///     .with_dir("/A/Locked/Inner")
///     .with_denied("/A/Locked");
///
/// assert!(fs.read_dir("/A").is_ok());
/// assert!(fs.read_dir("/A/Locked").unwrap_err().is_permission_denied());
/// assert!(!fs.exists("/A/Locked/Inner"));
/// assert_eq!(fs.read_dir_calls(), 2);
/// ```
#[derive(Debug)]
pub struct MockFileSystem {
    convention: PathConvention,
    cwd: String,
    dirs: BTreeMap<String, Vec<String>>,
    files: BTreeSet<String>,
    denied: BTreeSet<String>,
    read_dir_calls: AtomicUsize,
}

impl MockFileSystem {
    /// Create an empty filesystem holding only the root directory.
    ///
    /// The root and initial working directory are `/` for the POSIX
    /// convention and `C:\` for the Windows convention.
    #[must_use]
    pub fn new(convention: PathConvention) -> Self {
        let root = match convention {
            PathConvention::Posix => "/",
            PathConvention::Windows => "C:\\",
        }
        .to_string();

        let mut dirs = BTreeMap::new();
        dirs.insert(root.clone(), Vec::new());

        Self {
            convention,
            cwd: root,
            dirs,
            files: BTreeSet::new(),
            denied: BTreeSet::new(),
            read_dir_calls: AtomicUsize::new(0),
        }
    }

    /// Set the working directory, creating it if needed.
    #[must_use]
    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = self.key(cwd);
        let cwd = self.cwd.clone();
        self.add_entry(&cwd, true);
        self
    }

    /// Add a directory and any missing ancestors.
    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        let key = self.key(path);
        self.add_entry(&key, true);
        self
    }

    /// Add a file and any missing ancestor directories.
    #[must_use]
    pub fn with_file(mut self, path: &str) -> Self {
        let key = self.key(path);
        self.add_entry(&key, false);
        self
    }

    /// Make a directory unreadable.
    #[must_use]
    pub fn with_denied(mut self, path: &str) -> Self {
        let key = self.key(path);
        self.denied.insert(key);
        self
    }

    /// The convention this filesystem's paths follow.
    #[must_use]
    pub const fn convention(&self) -> PathConvention {
        self.convention
    }

    /// Number of `read_dir` calls made so far.
    #[must_use]
    pub fn read_dir_calls(&self) -> usize {
        self.read_dir_calls.load(Ordering::SeqCst)
    }

    /// Reset the `read_dir` call counter.
    pub fn reset_counters(&self) {
        self.read_dir_calls.store(0, Ordering::SeqCst);
    }

    fn key(&self, path: &str) -> String {
        normalize::absolutize(path, &self.cwd, self.convention)
    }

    fn add_entry(&mut self, path: &str, is_dir: bool) {
        let Some(root) = self.convention.root(path) else {
            return;
        };
        let segments: Vec<String> = self
            .convention
            .segments(path)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut current = root;
        self.dirs.entry(current.clone()).or_default();

        for (idx, segment) in segments.iter().enumerate() {
            let child = self.convention.join(&current, segment);
            let listing = self.dirs.entry(current.clone()).or_default();
            if !listing.contains(segment) {
                listing.push(segment.clone());
            }

            let is_last = idx + 1 == segments.len();
            if is_last && !is_dir {
                self.files.insert(child.clone());
            } else {
                self.dirs.entry(child.clone()).or_default();
            }
            current = child;
        }
    }

    /// Whether `path` is `ancestor` or lies beneath it.
    fn is_within(&self, ancestor: &str, path: &str) -> bool {
        if path == ancestor {
            return true;
        }
        path.strip_prefix(ancestor).is_some_and(|rest| {
            ancestor.ends_with(|c| self.convention.is_separator(c))
                || rest.starts_with(|c| self.convention.is_separator(c))
        })
    }

    fn denied_for_listing(&self, key: &str) -> bool {
        self.denied.iter().any(|d| self.is_within(d, key))
    }

    fn denied_for_stat(&self, key: &str) -> bool {
        self.denied
            .iter()
            .any(|d| d.as_str() != key && self.is_within(d, key))
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &str) -> bool {
        let key = self.key(path);
        if self.denied_for_stat(&key) {
            return false;
        }
        self.dirs.contains_key(&key) || self.files.contains(&key)
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        self.read_dir_calls.fetch_add(1, Ordering::SeqCst);
        let key = self.key(path);

        if self.denied_for_listing(&key) {
            return Err(Error::PermissionDenied { path: key.into() });
        }
        if let Some(entries) = self.dirs.get(&key) {
            return Ok(entries.clone());
        }
        if self.files.contains(&key) {
            return Err(Error::NotADirectory { path: key.into() });
        }
        Err(Error::PathNotFound { path: key.into() })
    }

    fn current_dir(&self) -> Result<String> {
        Ok(self.cwd.clone())
    }
}
