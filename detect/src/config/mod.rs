//! Configuration system for detect.
//!
//! Settings come from YAML files, `DETECT_*` environment variables and
//! programmatic overrides.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`DETECT_NOCASE`, `DETECT_OUTPUT_FORMAT`)
//! 3. Private project config (`detect.local.yaml`)
//! 4. Project config (`detect.yaml`)
//! 5. User config (`~/.detect/config.yaml`)
//! 6. Built-in defaults (`nocase: false`, `output_format: text`)
//!
//! # Examples
//!
//! ```no_run
//! use detect::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let options = config.resolve_options();
//! println!("nocase: {}", options.nocase);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
