//! Core types for path resolution.
//!
//! This module defines the options a resolution runs with and the values it
//! produces: the three-way [`MatchResult`] and the [`ResolvedPath`] handed
//! back to callers.

use std::fmt;
use std::path::{Path, PathBuf};

/// Options controlling a single resolution.
///
/// # Examples
///
/// ```
/// use detect::ResolveOptions;
///
/// let exact = ResolveOptions::default();
/// assert!(!exact.nocase);
///
/// let fuzzy = ResolveOptions::new().with_nocase(true);
/// assert!(fuzzy.nocase);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResolveOptions {
    /// Fall back to case-insensitive matching against the real directory
    /// entries when the path does not exist exactly as given.
    pub nocase: bool,
}

impl ResolveOptions {
    /// Exact-match options.
    #[must_use]
    pub const fn new() -> Self {
        Self { nocase: false }
    }

    /// Enable or disable the case-insensitive fallback.
    #[must_use]
    pub const fn with_nocase(mut self, nocase: bool) -> Self {
        self.nocase = nocase;
        self
    }
}

/// How a resolved path relates to the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The path exists with the casing the caller gave.
    Exact,
    /// The path was found by matching one or more segments case-insensitively.
    Corrected,
}

/// Terminal outcome of one resolution.
///
/// # Examples
///
/// ```
/// use detect::MatchResult;
///
/// let found = MatchResult::Corrected("/srv/App.toml".to_string());
/// assert_eq!(found.path(), Some("/srv/App.toml"));
/// assert!(MatchResult::NotFound.path().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Found with the path as given (in canonical form).
    Exact(String),
    /// Found under a differently-cased path.
    Corrected(String),
    /// No stage located the path.
    NotFound,
}

impl MatchResult {
    /// The resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Exact(path) | Self::Corrected(path) => Some(path),
            Self::NotFound => None,
        }
    }

    /// Whether a path was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// Convert into a [`ResolvedPath`], recording what was requested.
    #[must_use]
    pub fn into_resolved(self, requested: &str) -> Option<ResolvedPath> {
        match self {
            Self::Exact(path) => Some(ResolvedPath::new(path, requested, MatchKind::Exact)),
            Self::Corrected(path) => {
                Some(ResolvedPath::new(path, requested, MatchKind::Corrected))
            }
            Self::NotFound => None,
        }
    }
}

/// A path that resolved to a real filesystem entry.
///
/// # Examples
///
/// ```
/// use detect::{MatchKind, ResolvedPath};
///
/// let resolved = ResolvedPath::new("/srv/App.toml", "/srv/app.toml", MatchKind::Corrected);
/// assert!(resolved.was_corrected());
/// assert_eq!(resolved.as_str(), "/srv/App.toml");
/// assert_eq!(resolved.requested(), "/srv/app.toml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    path: String,
    requested: String,
    kind: MatchKind,
}

impl ResolvedPath {
    /// Create a resolved path.
    #[must_use]
    pub fn new(path: impl Into<String>, requested: impl Into<String>, kind: MatchKind) -> Self {
        Self {
            path: path.into(),
            requested: requested.into(),
            kind,
        }
    }

    /// The absolute canonical path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The absolute canonical path as a `Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The path as the caller supplied it.
    #[must_use]
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// How the path was found.
    #[must_use]
    pub const fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Whether the casing differs from what was requested.
    #[must_use]
    pub fn was_corrected(&self) -> bool {
        self.kind == MatchKind::Corrected
    }

    /// Consume and return the canonical path.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// Consume and return the canonical path as a `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(self.path)
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
