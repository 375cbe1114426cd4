//! CLI command implementations.
//!
//! - `resolve`: Resolve paths, optionally correcting their case
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod show_config;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
