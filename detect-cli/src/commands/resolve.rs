//! Command to resolve paths to their canonical form.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use detect::{Config, OutputFormat, ResolvedPath, Resolver};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve paths, printing the canonical form of each one that exists.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Fall back to case-insensitive matching when a path is not found
    #[arg(long, short = 'i')]
    pub nocase: bool,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Outcome for one requested path.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Resolution {
    /// The path as given on the command line.
    pub input: String,
    /// The canonical path, if it resolved.
    pub resolved: Option<String>,
    /// Whether the letter case of the path was corrected.
    pub corrected: bool,
}

impl Resolution {
    fn new(input: &Path, resolved: Option<ResolvedPath>) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            corrected: resolved.as_ref().is_some_and(ResolvedPath::was_corrected),
            resolved: resolved.map(ResolvedPath::into_string),
        }
    }
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            nocase: self.nocase.then_some(true),
            output_format: self.format,
        };
        let config = load_configuration(global, overrides)?;
        let options = config.resolve_options();

        let resolver = Resolver::new();
        let resolutions: Vec<Resolution> = self
            .paths
            .iter()
            .map(|path| Resolution::new(path, resolver.resolve_path(path, &options)))
            .collect();

        match config.output_format() {
            OutputFormat::Text => {
                for resolution in &resolutions {
                    match &resolution.resolved {
                        Some(path) => {
                            if global.verbose && resolution.corrected {
                                eprintln!("corrected: {} -> {path}", resolution.input);
                            }
                            println!("{path}");
                        }
                        None if !global.quiet => eprintln!("not found: {}", resolution.input),
                        None => {}
                    }
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&resolutions).map_err(io::Error::from)?;
                println!("{json}");
            }
        }

        let missing = resolutions.iter().filter(|r| r.resolved.is_none()).count();
        if missing > 0 {
            return Err(CliError::NotResolved(format!(
                "{missing} of {} path(s) could not be resolved",
                resolutions.len()
            )));
        }

        Ok(())
    }
}
