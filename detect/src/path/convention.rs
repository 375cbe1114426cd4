//! Path conventions.
//!
//! The resolver works on UTF-8 path strings and never asks the host OS how to
//! split or join them. A [`PathConvention`] supplies those rules instead, so
//! the same resolution logic runs against POSIX-style and Windows-style paths
//! regardless of the platform it is compiled for.

use std::fmt;

/// Separator and root rules for one family of paths.
///
/// # Examples
///
/// ```
/// use detect::path::PathConvention;
///
/// let posix = PathConvention::Posix;
/// assert_eq!(posix.segments("/usr//local/bin"), vec!["usr", "local", "bin"]);
/// assert_eq!(posix.join("/usr", "lib"), "/usr/lib");
///
/// let windows = PathConvention::Windows;
/// assert_eq!(windows.root("C:/Users"), Some("C:\\".to_string()));
/// assert_eq!(windows.segments("C:\\Users/Public"), vec!["Users", "Public"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathConvention {
    /// Forward-slash separated paths rooted at `/`.
    Posix,
    /// Backslash or forward-slash separated paths, optionally with a drive
    /// prefix such as `C:`.
    Windows,
}

impl Default for PathConvention {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for PathConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl PathConvention {
    /// The convention of the platform this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The separator used when building paths.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates segments under this convention.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Whether `path` is anchored at a root.
    ///
    /// Windows paths count as absolute when they start with a separator or a
    /// drive prefix. Taken on its own, a drive-relative path (`C:foo`) is
    /// anchored at that drive's root; [`absolutize`] resolves it against the
    /// working directory instead when the drives agree.
    ///
    /// [`absolutize`]: crate::path::normalize::absolutize
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        self.split_root(path).0.is_some()
    }

    /// Whether `path` pins down a location without consulting the working
    /// directory.
    ///
    /// Under the Windows convention a path rooted at a bare separator still
    /// takes its drive from the working directory, and a drive-relative path
    /// takes its directory from it. UNC paths are fully qualified.
    #[must_use]
    pub fn is_fully_qualified(self, path: &str) -> bool {
        match self {
            Self::Posix => self.is_absolute(path),
            Self::Windows => {
                self.split_unc(path).is_some()
                    || (self.drive(path).is_some() && !self.is_drive_relative(path))
            }
        }
    }

    /// Whether `path` names a drive without a separator after it, as in
    /// `C:foo` or a bare `C:`.
    #[must_use]
    pub fn is_drive_relative(self, path: &str) -> bool {
        self.drive(path)
            .is_some_and(|_| !path[2..].starts_with(|c| self.is_separator(c)))
    }

    /// The root of an absolute path, written with this convention's separator.
    ///
    /// Drive letters are uppercased and UNC roots keep their
    /// `\\server\share\` form. Returns `None` for relative paths.
    #[must_use]
    pub fn root(self, path: &str) -> Option<String> {
        self.split_root(path).0
    }

    /// The drive prefix (`C:`) of a Windows-style path.
    #[must_use]
    pub fn drive(self, path: &str) -> Option<&str> {
        match self {
            Self::Posix => None,
            Self::Windows => {
                let bytes = path.as_bytes();
                if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
                    Some(&path[..2])
                } else {
                    None
                }
            }
        }
    }

    /// The non-empty segments after the root, in order.
    ///
    /// Runs of separators collapse, so `"/a//b/"` yields `["a", "b"]`.
    #[must_use]
    pub fn segments(self, path: &str) -> Vec<&str> {
        let (_, rest) = self.split_root(path);
        rest.split(|c| self.is_separator(c))
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Append a single entry name to a directory path.
    #[must_use]
    pub fn join(self, dir: &str, name: &str) -> String {
        if dir.is_empty() {
            return name.to_string();
        }
        if dir.ends_with(|c| self.is_separator(c)) {
            format!("{dir}{name}")
        } else {
            format!("{dir}{}{name}", self.separator())
        }
    }

    /// The directory containing `path`.
    ///
    /// The parent of a root is the root itself; the parent of a relative
    /// single segment is `"."`.
    #[must_use]
    pub fn parent(self, path: &str) -> String {
        let (root, _) = self.split_root(path);
        let mut segments = self.segments(path);
        segments.pop();
        self.assemble(root.as_deref(), &segments)
    }

    /// Build a path from an optional root and a list of segments.
    #[must_use]
    pub fn assemble(self, root: Option<&str>, segments: &[&str]) -> String {
        let sep = self.separator().to_string();
        let body = segments.join(&sep);
        match root {
            Some(root) => format!("{root}{body}"),
            None if body.is_empty() => ".".to_string(),
            None => body,
        }
    }

    fn split_root(self, path: &str) -> (Option<String>, &str) {
        match self {
            Self::Posix => {
                if path.starts_with('/') {
                    (Some("/".to_string()), path)
                } else {
                    (None, path)
                }
            }
            Self::Windows => {
                if let Some((root, rest)) = self.split_unc(path) {
                    (Some(root), rest)
                } else if self.drive(path).is_some() {
                    let letter = char::from(path.as_bytes()[0].to_ascii_uppercase());
                    (Some(format!("{letter}:\\")), &path[2..])
                } else if path.starts_with(|c| self.is_separator(c)) {
                    (Some("\\".to_string()), path)
                } else {
                    (None, path)
                }
            }
        }
    }

    /// Split a `\\server\share` prefix off a Windows path.
    ///
    /// Both components must be present; `\\server` alone is rooted at a
    /// plain separator.
    fn split_unc(self, path: &str) -> Option<(String, &str)> {
        let mut chars = path.chars();
        let leading = (chars.next(), chars.next(), chars.next());
        let (Some(a), Some(b), Some(c)) = leading else {
            return None;
        };
        if !self.is_separator(a) || !self.is_separator(b) || self.is_separator(c) {
            return None;
        }

        let body = &path[2..];
        let server_end = body.find(|c| self.is_separator(c))?;
        let server = &body[..server_end];
        let after = body[server_end..].trim_start_matches(|c| self.is_separator(c));
        let share_end = after
            .find(|c| self.is_separator(c))
            .unwrap_or(after.len());
        let share = &after[..share_end];
        if share.is_empty() {
            return None;
        }

        Some((format!("\\\\{server}\\{share}\\"), &after[share_end..]))
    }
}
