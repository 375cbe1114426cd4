//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use detect::Config;

/// Show the configuration after merging files, environment and defaults.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Print only this setting (nocase or output_format)
    #[arg(value_name = "KEY")]
    pub key: Option<String>,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, Config::default())?;

        match self.key.as_deref() {
            None => {
                let yaml =
                    serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?;
                print!("{yaml}");
            }
            Some("nocase") => println!("{}", config.resolve_options().nocase),
            Some("output_format") => println!("{}", config.output_format()),
            Some(other) => {
                return Err(CliError::InvalidArguments(format!(
                    "unknown setting '{other}' (expected nocase or output_format)"
                )));
            }
        }

        Ok(())
    }
}
