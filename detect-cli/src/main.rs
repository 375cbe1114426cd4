//! Main entry point for the detect CLI.
//!
//! Provides commands for resolving paths:
//! - `resolve`: Print the canonical form of existing paths
//! - `show-config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log records to stderr based on verbosity
    let _installed = detect::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if e.is_reported(global.quiet) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
