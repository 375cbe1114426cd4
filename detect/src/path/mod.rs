//! Path resolution with optional case-insensitive matching.
//!
//! This module answers one question: does this path exist, and if so, what
//! is its canonical absolute form? With the `nocase` option it also answers
//! it for paths whose letter case differs from what is on disk.
//!
//! # Key Concepts
//!
//! ## Canonical form
//!
//! Paths are made absolute against the working directory, `.` and `..` are
//! resolved, and separators are normalized for the path convention in use.
//! This is purely lexical; symlinks are not followed.
//!
//! ## Case-insensitive fallback
//!
//! When a path does not exist exactly as written and `nocase` is set, the
//! resolver reads real directory listings to recover the on-disk casing:
//!
//! - **Probe**: list the path itself (it may be a directory), else its parent.
//! - **Fuzzy walk**: if neither can be listed, walk from the root and match
//!   each segment against the entries of the directory above it.
//!
//! Unreadable directories end that strategy; they never produce an error.
//!
//! ## Conventions and filesystems
//!
//! Resolution logic is independent of the host OS. A [`PathConvention`]
//! supplies separator and root rules, and a [`FileSystem`] supplies the
//! directory listings, so both POSIX and Windows-style behaviour can be
//! exercised with a [`MockFileSystem`].
//!
//! # Examples
//!
//! ```
//! use detect::path::{MockFileSystem, PathConvention};
//! use detect::{ResolveOptions, Resolver};
//!
//! let conv = PathConvention::Posix;
//! let fs = MockFileSystem::new(conv).with_file("/A/Mixed/CaSeD/File.txt");
//! let resolver = Resolver::with_filesystem(fs, conv);
//!
//! let nocase = ResolveOptions::new().with_nocase(true);
//! let resolved = resolver.resolve("/a/mixed/cased/file.txt", &nocase).unwrap();
//! assert_eq!(resolved.as_str(), "/A/Mixed/CaSeD/File.txt");
//! assert!(resolved.was_corrected());
//!
//! assert!(resolver.resolve("/a/mixed/cased/file.txt", &ResolveOptions::default()).is_none());
//! ```

pub mod convention;
pub mod fs;
pub mod matching;
pub mod normalize;
pub mod probe;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use convention::PathConvention;
pub use fs::{FileSystem, MockFileSystem, OsFileSystem};
pub use matching::is_match;
pub use probe::{fuzzy_walk, probe, DirectoryProbe, StageOutcome};
pub use resolver::{resolve, Resolver};
pub use types::{MatchKind, MatchResult, ResolveOptions, ResolvedPath};
