//! CLI structure and command definitions.
//!
//! Defines the main CLI structure using clap's derive macros, including
//! global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, ShowConfigCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving filesystem paths.
#[derive(Parser)]
#[command(name = "detect")]
#[command(
    version,
    about = "Resolve paths, optionally correcting their letter case",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "DETECT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve paths to their canonical form
    Resolve(ResolveCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
