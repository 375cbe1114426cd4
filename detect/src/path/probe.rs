//! Directory probing for case-insensitive resolution.
//!
//! Finding the real casing of a path means reading real directory listings.
//! The probe tries the cheapest listings first and only walks the whole path
//! from the root when neither the target nor its parent can be listed.
//!
//! Every stage reports a [`StageOutcome`]: a listing failure is
//! `Indeterminate` (try the next stage), never an error for the caller.

use crate::path::convention::PathConvention;
use crate::path::fs::FileSystem;
use crate::path::matching::is_match;

/// A directory that was successfully listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryProbe {
    path: String,
    entries: Vec<String>,
}

impl DirectoryProbe {
    /// Create a probe result.
    #[must_use]
    pub fn new(path: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    /// The directory that was listed.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Entry names in listing order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Outcome of one resolution stage.
///
/// # Examples
///
/// ```
/// use detect::path::StageOutcome;
///
/// let outcome: StageOutcome<u8> = StageOutcome::Indeterminate;
/// assert_eq!(outcome.or_else(|| StageOutcome::Found(1)), StageOutcome::Found(1));
///
/// let outcome: StageOutcome<u8> = StageOutcome::NotFound;
/// assert_eq!(outcome.or_else(|| StageOutcome::Found(1)), StageOutcome::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome<T> {
    /// The stage produced a result.
    Found(T),
    /// The stage determined there is nothing to find.
    NotFound,
    /// The stage could not decide; the next stage should run.
    Indeterminate,
}

impl<T> StageOutcome<T> {
    /// Run `next` only if this stage was indeterminate.
    pub fn or_else(self, next: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Indeterminate => next(),
            decided => decided,
        }
    }

    /// The found value, treating both other outcomes as absent.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::Indeterminate => None,
        }
    }
}

/// List one directory.
///
/// Any failure is `Indeterminate`.
pub fn list_directory<F: FileSystem + ?Sized>(fs: &F, path: &str) -> StageOutcome<DirectoryProbe> {
    match fs.read_dir(path) {
        Ok(entries) => StageOutcome::Found(DirectoryProbe::new(path, entries)),
        Err(e) => {
            log::debug!("cannot list {path}: {e}");
            StageOutcome::Indeterminate
        }
    }
}

/// Find a readable directory that can reveal the real casing of `canonical`.
///
/// Tries `canonical` itself, then its parent, then a [`fuzzy_walk`]. Only the
/// walk can report `NotFound`.
///
/// # Examples
///
/// ```
/// use detect::path::{probe, MockFileSystem, PathConvention, StageOutcome};
///
/// let conv = PathConvention::Posix;
/// let fs = MockFileSystem::new(conv).with_file("/srv/App.toml");
///
/// let found = probe(&fs, conv, "/srv/app.toml").found().unwrap();
/// assert_eq!(found.path(), "/srv");
/// assert_eq!(found.entries(), ["App.toml".to_string()]);
/// ```
pub fn probe<F: FileSystem + ?Sized>(
    fs: &F,
    convention: PathConvention,
    canonical: &str,
) -> StageOutcome<DirectoryProbe> {
    list_directory(fs, canonical)
        .or_else(|| list_directory(fs, &convention.parent(canonical)))
        .or_else(|| fuzzy_walk(fs, convention, canonical))
}

/// Rebuild the real casing of `canonical` one segment at a time.
///
/// Starting at the root, each directory is listed and the entry matching the
/// next segment case-insensitively is followed. The returned probe is the
/// last directory listed, i.e. the real-cased directory that should contain
/// the final segment.
///
/// A segment with no matching entry is skipped and the walk continues in the
/// same directory. A directory that cannot be listed ends the walk with
/// `NotFound`.
///
/// Siblings that differ only by case are not told apart: the first one listed
/// is followed even when a later one matches the segment exactly. If the
/// target lives under the later sibling, the walk misses it and resolution
/// reports the path as not found.
///
/// # Examples
///
/// ```
/// use detect::path::{fuzzy_walk, MockFileSystem, PathConvention, StageOutcome};
///
/// let conv = PathConvention::Posix;
/// let fs = MockFileSystem::new(conv).with_file("/A/Mixed/CaSeD/File.txt");
///
/// let found = fuzzy_walk(&fs, conv, "/a/mixed/cased/file.txt").found().unwrap();
/// assert_eq!(found.path(), "/A/Mixed/CaSeD");
/// assert_eq!(found.entries(), ["File.txt".to_string()]);
/// ```
pub fn fuzzy_walk<F: FileSystem + ?Sized>(
    fs: &F,
    convention: PathConvention,
    canonical: &str,
) -> StageOutcome<DirectoryProbe> {
    let Some(root) = convention.root(canonical) else {
        return StageOutcome::NotFound;
    };

    let mut confirmed = root;
    let mut last = DirectoryProbe::new(canonical, Vec::new());

    for segment in convention.segments(canonical) {
        let entries = match fs.read_dir(&confirmed) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("fuzzy walk stopped at {confirmed}: {e}");
                return StageOutcome::NotFound;
            }
        };

        let next = entries
            .iter()
            .find(|name| is_match(name, segment))
            .map(|name| convention.join(&confirmed, name));

        last = DirectoryProbe::new(confirmed.clone(), entries);
        match next {
            Some(path) => {
                log::trace!("segment {segment} resolved to {path}");
                confirmed = path;
            }
            None => log::trace!("no entry in {confirmed} matches {segment}"),
        }
    }

    StageOutcome::Found(last)
}
