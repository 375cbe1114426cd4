//! Path resolution with an optional case-insensitive fallback.
//!
//! This module provides the [`Resolver`] type, the main interface for
//! checking whether a path exists and recovering its real casing when it
//! does not exist exactly as written.

use std::path::{Path, PathBuf};

use crate::path::convention::PathConvention;
use crate::path::fs::{FileSystem, OsFileSystem};
use crate::path::matching::is_match;
use crate::path::normalize;
use crate::path::probe::{self, DirectoryProbe, StageOutcome};
use crate::path::types::{MatchResult, ResolveOptions, ResolvedPath};

/// Resolves paths against a filesystem.
///
/// Resolution runs in stages, each of which either decides or defers:
/// 1. **Direct check**: if the path exists as given, return its canonical form.
/// 2. **Directory probe** (with `nocase`): list the path, or its parent, to
///    learn the real entry names.
/// 3. **Fuzzy walk** (with `nocase`): if neither can be listed, rebuild the
///    real casing one segment at a time from the root.
///
/// A resolver holds no per-call state and can be shared between threads.
///
/// # Examples
///
/// ```no_run
/// use detect::{ResolveOptions, Resolver};
///
/// let resolver = Resolver::new();
///
/// let exact = resolver.resolve("Cargo.toml", &ResolveOptions::default());
///
/// let options = ResolveOptions::new().with_nocase(true);
/// let fuzzy = resolver.resolve("cargo.TOML", &options);
/// assert_eq!(exact.map(|p| p.into_string()), fuzzy.map(|p| p.into_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<F = OsFileSystem> {
    fs: F,
    convention: PathConvention,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            fs: OsFileSystem,
            convention: PathConvention::host(),
        }
    }
}

impl Resolver {
    /// Create a resolver for the host filesystem and path convention.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileSystem> Resolver<F> {
    /// Create a resolver over a specific filesystem and path convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use detect::path::{MockFileSystem, PathConvention};
    /// use detect::{ResolveOptions, Resolver};
    ///
    /// let conv = PathConvention::Windows;
    /// let fs = MockFileSystem::new(conv).with_file("C:\\Users\\Me\\Notes.TXT");
    /// let resolver = Resolver::with_filesystem(fs, conv);
    ///
    /// let options = ResolveOptions::new().with_nocase(true);
    /// let resolved = resolver.resolve("c:/users/me/notes.txt", &options).unwrap();
    /// assert_eq!(resolved.as_str(), "C:\\Users\\Me\\Notes.TXT");
    /// ```
    #[must_use]
    pub const fn with_filesystem(fs: F, convention: PathConvention) -> Self {
        Self { fs, convention }
    }

    /// The filesystem this resolver reads from.
    #[must_use]
    pub const fn filesystem(&self) -> &F {
        &self.fs
    }

    /// The path convention this resolver splits and joins paths with.
    #[must_use]
    pub const fn convention(&self) -> PathConvention {
        self.convention
    }

    /// Resolve `filepath`, returning `None` if no stage finds it.
    ///
    /// An empty path never resolves. Resolution never fails with an error:
    /// unreadable directories and missing ancestors are simply "not found".
    #[must_use]
    pub fn resolve(&self, filepath: &str, options: &ResolveOptions) -> Option<ResolvedPath> {
        self.lookup(filepath, options).into_resolved(filepath)
    }

    /// Resolve a `Path`.
    ///
    /// Paths that are not valid UTF-8 never resolve.
    #[must_use]
    pub fn resolve_path(&self, filepath: &Path, options: &ResolveOptions) -> Option<ResolvedPath> {
        let Some(filepath) = filepath.to_str() else {
            log::debug!("ignoring non-UTF-8 path {}", filepath.display());
            return None;
        };
        self.resolve(filepath, options)
    }

    /// Resolve `filepath` and report which kind of match was made.
    ///
    /// # Examples
    ///
    /// ```
    /// use detect::path::{MockFileSystem, PathConvention};
    /// use detect::{MatchResult, ResolveOptions, Resolver};
    ///
    /// let conv = PathConvention::Posix;
    /// let fs = MockFileSystem::new(conv).with_file("/srv/App.toml");
    /// let resolver = Resolver::with_filesystem(fs, conv);
    /// let nocase = ResolveOptions::new().with_nocase(true);
    ///
    /// assert_eq!(
    ///     resolver.lookup("/srv/App.toml", &nocase),
    ///     MatchResult::Exact("/srv/App.toml".to_string())
    /// );
    /// assert_eq!(
    ///     resolver.lookup("/SRV/app.toml", &nocase),
    ///     MatchResult::Corrected("/srv/App.toml".to_string())
    /// );
    /// assert_eq!(
    ///     resolver.lookup("/srv/app.toml", &ResolveOptions::default()),
    ///     MatchResult::NotFound
    /// );
    /// ```
    #[must_use]
    pub fn lookup(&self, filepath: &str, options: &ResolveOptions) -> MatchResult {
        if filepath.is_empty() {
            return MatchResult::NotFound;
        }

        if self.fs.exists(filepath) {
            return match self.canonical(filepath) {
                Some(canonical) => MatchResult::Exact(canonical),
                None => MatchResult::NotFound,
            };
        }

        if options.nocase {
            self.lookup_nocase(filepath)
        } else {
            MatchResult::NotFound
        }
    }

    /// The absolute, lexically normalized form of `path`.
    fn canonical(&self, path: &str) -> Option<String> {
        if self.convention.is_fully_qualified(path) {
            return Some(normalize::resolve_segments(path, self.convention));
        }
        match self.fs.current_dir() {
            Ok(cwd) => Some(normalize::absolutize(path, &cwd, self.convention)),
            Err(e) => {
                log::debug!("cannot make {path} absolute: {e}");
                None
            }
        }
    }

    fn lookup_nocase(&self, filepath: &str) -> MatchResult {
        let Some(canonical) = self.canonical(filepath) else {
            return MatchResult::NotFound;
        };

        let StageOutcome::Found(listing) = probe::probe(&self.fs, self.convention, &canonical)
        else {
            return MatchResult::NotFound;
        };

        // Listing the path itself succeeded, so it is an existing directory.
        if listing.path() == canonical {
            return MatchResult::Exact(canonical);
        }

        self.select_entry(&listing, &canonical)
    }

    /// Pick the first listed entry whose full path matches `canonical`.
    fn select_entry(&self, listing: &DirectoryProbe, canonical: &str) -> MatchResult {
        for name in listing.entries() {
            let candidate = self.convention.join(listing.path(), name);
            if is_match(&candidate, canonical) {
                log::debug!("{canonical} matched {candidate}");
                return if candidate == canonical {
                    MatchResult::Exact(candidate)
                } else {
                    MatchResult::Corrected(candidate)
                };
            }
        }
        log::debug!("no entry in {} matches {canonical}", listing.path());
        MatchResult::NotFound
    }
}

/// Resolve `filepath` on the host filesystem.
///
/// Returns the absolute canonical path if the path exists, or, with
/// `options.nocase`, if a differently-cased path exists. Empty and
/// non-UTF-8 paths return `None`.
///
/// # Examples
///
/// ```no_run
/// use detect::{resolve, ResolveOptions};
///
/// assert!(resolve(".", &ResolveOptions::default()).is_some());
/// assert!(resolve("", &ResolveOptions::default()).is_none());
///
/// let nocase = ResolveOptions::new().with_nocase(true);
/// if let Some(path) = resolve("readme.MD", &nocase) {
///     println!("found {}", path.display());
/// }
/// ```
#[must_use]
pub fn resolve(filepath: impl AsRef<Path>, options: &ResolveOptions) -> Option<PathBuf> {
    Resolver::new()
        .resolve_path(filepath.as_ref(), options)
        .map(ResolvedPath::into_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::fs::MockFileSystem;
    use crate::path::types::MatchKind;

    const POSIX: PathConvention = PathConvention::Posix;

    fn nocase() -> ResolveOptions {
        ResolveOptions::new().with_nocase(true)
    }

    fn exact() -> ResolveOptions {
        ResolveOptions::default()
    }

    fn resolver(fs: MockFileSystem) -> Resolver<MockFileSystem> {
        let convention = fs.convention();
        Resolver::with_filesystem(fs, convention)
    }

    fn resolved(resolver: &Resolver<MockFileSystem>, path: &str, options: &ResolveOptions) -> Option<String> {
        resolver.resolve(path, options).map(ResolvedPath::into_string)
    }

    #[test]
    fn test_empty_path_is_not_found() {
        let r = resolver(MockFileSystem::new(POSIX));
        assert_eq!(r.lookup("", &exact()), MatchResult::NotFound);
        assert_eq!(r.lookup("", &nocase()), MatchResult::NotFound);
        assert_eq!(r.filesystem().read_dir_calls(), 0);
    }

    #[test]
    fn test_existing_file_resolves_to_canonical() {
        let fs = MockFileSystem::new(POSIX)
            .with_cwd("/work")
            .with_file("/work/src/lib.rs");
        let r = resolver(fs);

        assert_eq!(
            resolved(&r, "src/lib.rs", &exact()),
            Some("/work/src/lib.rs".to_string())
        );
        assert_eq!(
            resolved(&r, "./src/../src/lib.rs", &exact()),
            Some("/work/src/lib.rs".to_string())
        );
    }

    #[test]
    fn test_existing_directory_resolves_with_and_without_nocase() {
        let fs = MockFileSystem::new(POSIX).with_cwd("/work").with_dir("/work/Docs");
        let r = resolver(fs);

        assert_eq!(resolved(&r, ".", &exact()), Some("/work".to_string()));
        assert_eq!(resolved(&r, "Docs/", &exact()), Some("/work/Docs".to_string()));
        assert_eq!(resolved(&r, "Docs", &nocase()), Some("/work/Docs".to_string()));
    }

    #[test]
    fn test_missing_path_without_nocase() {
        let fs = MockFileSystem::new(POSIX).with_file("/A/FooFile.js");
        let r = resolver(fs);

        assert_eq!(resolved(&r, "/A/foofile.js", &exact()), None);
        assert_eq!(r.filesystem().read_dir_calls(), 0);
    }

    #[test]
    fn test_nocase_file_in_existing_directory() {
        let fs = MockFileSystem::new(POSIX).with_file("/A/FooFile.js");
        let r = resolver(fs);

        let lower = r.resolve("/A/foofile.js", &nocase()).unwrap();
        assert_eq!(lower.as_str(), "/A/FooFile.js");
        assert_eq!(lower.kind(), MatchKind::Corrected);
        assert_eq!(lower.requested(), "/A/foofile.js");

        assert_eq!(
            resolved(&r, "/A/FOOFILE.JS", &nocase()),
            Some("/A/FooFile.js".to_string())
        );
    }

    #[test]
    fn test_nocase_deep_mismatch() {
        let fs = MockFileSystem::new(POSIX).with_file("/A/Mixed/CaSeD/File.txt");
        let r = resolver(fs);

        assert_eq!(
            resolved(&r, "/a/mixed/cased/file.txt", &nocase()),
            Some("/A/Mixed/CaSeD/File.txt".to_string())
        );
    }

    #[test]
    fn test_nocase_deep_mismatch_directory_target() {
        let fs = MockFileSystem::new(POSIX).with_dir("/A/Mixed/CaSeD");
        let r = resolver(fs);

        assert_eq!(
            resolved(&r, "/a/mixed/cased", &nocase()),
            Some("/A/Mixed/CaSeD".to_string())
        );
    }

    #[test]
    fn test_nocase_partial_failure_on_denied_ancestor() {
        let fs = MockFileSystem::new(POSIX)
            .with_file("/A/Locked/Inner/File.txt")
            .with_denied("/A/Locked");
        let r = resolver(fs);

        assert_eq!(resolved(&r, "/a/locked/inner/file.txt", &nocase()), None);
    }

    #[test]
    fn test_nocase_no_matching_entry() {
        let fs = MockFileSystem::new(POSIX).with_file("/A/FooFile.js");
        let r = resolver(fs);

        assert_eq!(resolved(&r, "/A/BarFile.js", &nocase()), None);
    }

    #[test]
    fn test_nocase_unmatched_intermediate_segment() {
        let fs = MockFileSystem::new(POSIX).with_file("/A/File.txt");
        let r = resolver(fs);

        // The walk stays in /A past "ghost", but /A/File.txt is not a
        // case-insensitive match for the full requested path.
        assert_eq!(resolved(&r, "/a/ghost/file.txt", &nocase()), None);
    }

    #[test]
    fn test_nonexistent_directory_with_trailing_separator() {
        let fs = MockFileSystem::new(POSIX).with_cwd("/work").with_file("/work/readme.md");
        let r = resolver(fs);

        assert_eq!(resolved(&r, "nonexistent-dir/", &exact()), None);
        assert_eq!(resolved(&r, "nonexistent-dir/", &nocase()), None);
    }

    #[test]
    fn test_nocase_skips_listing_when_direct_check_succeeds() {
        let fs = MockFileSystem::new(POSIX).with_file("/A/Mixed/File.txt");
        let r = resolver(fs);

        assert!(r.resolve("/A/Mixed/File.txt", &nocase()).is_some());
        assert!(r.resolve("/A/Mixed", &nocase()).is_some());
        assert_eq!(r.filesystem().read_dir_calls(), 0);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let fs = MockFileSystem::new(POSIX).with_file("/A/Mixed/CaSeD/File.txt");
        let r = resolver(fs);

        let first = resolved(&r, "/a/mixed/cased/file.txt", &nocase()).unwrap();
        let second = r.resolve(&first, &nocase()).unwrap();
        assert_eq!(second.as_str(), first);
        assert_eq!(second.kind(), MatchKind::Exact);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let fs = MockFileSystem::new(POSIX)
            .with_file("/A/Readme.md")
            .with_file("/A/README.md");
        let r = resolver(fs);

        assert_eq!(
            resolved(&r, "/A/readme.MD", &nocase()),
            Some("/A/Readme.md".to_string())
        );
    }

    #[test]
    fn test_case_only_siblings_can_hide_target() {
        let fs = MockFileSystem::new(POSIX)
            .with_file("/Proj/x.txt")
            .with_file("/proj/Sub/b.txt");
        let r = resolver(fs);

        assert_eq!(resolved(&r, "/proj/sub/b.txt", &nocase()), None);
        assert_eq!(
            resolved(&r, "/proj/Sub/B.TXT", &nocase()),
            Some("/proj/Sub/b.txt".to_string())
        );
    }

    #[test]
    fn test_windows_convention() {
        let conv = PathConvention::Windows;
        let fs = MockFileSystem::new(conv)
            .with_cwd("C:\\Work")
            .with_file("C:\\Work\\Src\\Main.RS");
        let r = resolver(fs);

        assert_eq!(
            resolved(&r, "Src\\Main.RS", &exact()),
            Some("C:\\Work\\Src\\Main.RS".to_string())
        );
        assert_eq!(
            resolved(&r, "src/main.rs", &nocase()),
            Some("C:\\Work\\Src\\Main.RS".to_string())
        );
        assert_eq!(
            resolved(&r, "\\WORK\\SRC\\MAIN.RS", &nocase()),
            Some("C:\\Work\\Src\\Main.RS".to_string())
        );
    }

    #[test]
    fn test_windows_drive_relative_resolves_against_cwd() {
        let conv = PathConvention::Windows;
        let fs = MockFileSystem::new(conv)
            .with_cwd("C:\\Work")
            .with_file("C:\\Work\\foo.txt")
            .with_file("C:\\Work\\Src\\Main.RS")
            .with_file("D:\\bar.txt");
        let r = resolver(fs);

        assert_eq!(
            resolved(&r, "C:foo.txt", &exact()),
            Some("C:\\Work\\foo.txt".to_string())
        );
        assert_eq!(
            resolved(&r, "c:src\\main.rs", &nocase()),
            Some("C:\\Work\\Src\\Main.RS".to_string())
        );
        assert_eq!(
            resolved(&r, "D:bar.txt", &exact()),
            Some("D:\\bar.txt".to_string())
        );
        assert_eq!(resolved(&r, "D:foo.txt", &nocase()), None);
    }

    #[test]
    fn test_windows_unc_path_keeps_its_share() {
        let conv = PathConvention::Windows;
        let fs = MockFileSystem::new(conv)
            .with_cwd("C:\\Work")
            .with_file("\\\\server\\share\\Docs\\Report.txt")
            .with_file("C:\\server\\share\\Docs\\Decoy.txt");
        let r = resolver(fs);

        assert_eq!(
            resolved(&r, "\\\\server\\share\\Docs\\Report.txt", &exact()),
            Some("\\\\server\\share\\Docs\\Report.txt".to_string())
        );
        assert_eq!(
            resolved(&r, "//server/share/docs/REPORT.txt", &nocase()),
            Some("\\\\server\\share\\Docs\\Report.txt".to_string())
        );
        assert_eq!(
            resolved(&r, "\\\\server\\share\\Docs\\Decoy.txt", &nocase()),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_path_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let r = resolver(MockFileSystem::new(POSIX));
        let raw = Path::new(OsStr::from_bytes(b"/bad\xff"));
        assert!(r.resolve_path(raw, &nocase()).is_none());
    }

    #[test]
    fn test_free_function_resolves_current_directory() {
        let resolved = resolve(".", &ResolveOptions::default()).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolve("", &ResolveOptions::default()).is_none());
    }
}
