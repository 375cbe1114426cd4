//! Lexical path normalization.
//!
//! This module turns a caller-supplied path into its canonical form:
//! - Relative paths are made absolute against a working directory
//! - `.` segments are dropped and `..` segments pop their parent
//! - Runs of separators collapse and trailing separators are removed
//! - The convention's own separator is used throughout
//!
//! Nothing here touches the filesystem; symlinks are left as written.

use crate::path::convention::PathConvention;

/// Resolve `.` and `..` segments of an absolute path.
///
/// `..` at the root stays at the root. A relative input is normalized as if
/// it were relative to nothing, so callers should pass absolute paths; see
/// [`absolutize`].
///
/// # Examples
///
/// ```
/// use detect::path::normalize::resolve_segments;
/// use detect::path::PathConvention;
///
/// let conv = PathConvention::Posix;
/// assert_eq!(resolve_segments("/a/./b/../c", conv), "/a/c");
/// assert_eq!(resolve_segments("/a/b/../../..", conv), "/");
/// assert_eq!(resolve_segments("//a//b/", conv), "/a/b");
///
/// let conv = PathConvention::Windows;
/// assert_eq!(resolve_segments("C:/a/../b", conv), "C:\\b");
/// ```
#[must_use]
pub fn resolve_segments(path: &str, convention: PathConvention) -> String {
    let root = convention.root(path);
    let mut resolved: Vec<&str> = Vec::new();

    for segment in convention.segments(path) {
        match segment {
            "." => {}
            ".." => {
                if resolved.last().is_some_and(|last| *last != "..") {
                    resolved.pop();
                } else if root.is_none() {
                    resolved.push(segment);
                }
            }
            _ => resolved.push(segment),
        }
    }

    convention.assemble(root.as_deref(), &resolved)
}

/// Make `path` absolute against `cwd` and normalize it.
///
/// Under the Windows convention a path that starts with a separator but has
/// no drive inherits the drive (or UNC share) of `cwd`. A drive-relative path (`C:foo`) is
/// resolved against `cwd` when `cwd` is on the same drive, and against that
/// drive's root otherwise. UNC paths never consult `cwd`.
///
/// # Examples
///
/// ```
/// use detect::path::normalize::absolutize;
/// use detect::path::PathConvention;
///
/// let conv = PathConvention::Posix;
/// assert_eq!(absolutize("src/../lib.rs", "/work", conv), "/work/lib.rs");
/// assert_eq!(absolutize("/etc/hosts", "/work", conv), "/etc/hosts");
/// assert_eq!(absolutize(".", "/work", conv), "/work");
///
/// let conv = PathConvention::Windows;
/// assert_eq!(absolutize("\\Temp", "D:\\work", conv), "D:\\Temp");
/// assert_eq!(absolutize("D:notes", "D:\\work", conv), "D:\\work\\notes");
/// assert_eq!(absolutize("\\\\host\\share\\x", "D:\\work", conv), "\\\\host\\share\\x");
/// ```
#[must_use]
pub fn absolutize(path: &str, cwd: &str, convention: PathConvention) -> String {
    if convention.is_drive_relative(path) {
        let (drive, rest) = path.split_at(2);
        let base = match convention.drive(cwd) {
            Some(cwd_drive) if cwd_drive.eq_ignore_ascii_case(drive) => cwd.to_string(),
            _ => format!("{drive}{}", convention.separator()),
        };
        return resolve_segments(&convention.join(&base, rest), convention);
    }

    if convention.is_fully_qualified(path) {
        return resolve_segments(path, convention);
    }

    if convention.is_absolute(path) {
        let device = convention
            .root(cwd)
            .map(|root| root.trim_end_matches(|c| convention.is_separator(c)).to_string())
            .unwrap_or_default();
        return resolve_segments(&format!("{device}{path}"), convention);
    }

    resolve_segments(&convention.join(cwd, path), convention)
}
