#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # detect
//!
//! A library for checking whether a path exists and recovering its real
//! casing when it was written with the wrong letter case.
//!
//! ## Core Types
//!
//! - [`Resolver`] and [`resolve`]: Path existence resolution
//! - [`ResolveOptions`]: Per-call options (`nocase`)
//! - [`ResolvedPath`] and [`MatchResult`]: Resolution results
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use detect::{resolve, ResolveOptions};
//!
//! // Exact lookup
//! if let Some(path) = resolve("Cargo.toml", &ResolveOptions::default()) {
//!     println!("found {}", path.display());
//! }
//!
//! // Case-insensitive fallback
//! let options = ResolveOptions::new().with_nocase(true);
//! assert_eq!(
//!     resolve("cargo.TOML", &options),
//!     resolve("Cargo.toml", &options),
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    is_match, resolve, MatchKind, MatchResult, PathConvention, ResolveOptions, ResolvedPath,
    Resolver,
};
