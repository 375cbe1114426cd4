//! Error types for the detect library.
//!
//! Resolution itself never fails: a path that cannot be resolved is reported
//! as `None`. These errors describe the internal filesystem and configuration
//! failures that the resolver folds into that outcome, using `thiserror` for
//! ergonomic error handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a detect error.
///
/// # Examples
///
/// ```
/// use detect::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the detect library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A directory listing was requested for something that is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },
}

impl Error {
    /// Map an I/O error raised while accessing `path` to a typed error.
    ///
    /// # Examples
    ///
    /// ```
    /// use detect::Error;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
    /// let err = Error::from_io("/missing", io_err);
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ if is_not_a_directory(&err) => Self::NotADirectory { path },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use detect::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use detect::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

// ENOTDIR has no stable `ErrorKind` on older toolchains.
#[cfg(unix)]
fn is_not_a_directory(err: &io::Error) -> bool {
    err.raw_os_error() == Some(20)
}

// ERROR_DIRECTORY (267) is what Windows reports for listing a file.
#[cfg(windows)]
fn is_not_a_directory(err: &io::Error) -> bool {
    err.raw_os_error() == Some(267)
}

#[cfg(not(any(unix, windows)))]
fn is_not_a_directory(_err: &io::Error) -> bool {
    false
}
