//! Secrets file helpers.

use anyhow::{Context, Result};
use appenv_config::constants::DEFAULT_SSM_PATH;
use appenv_config::parameter_store::production_parameter_names;
use appenv_config::{Profile, SecretField, SecretsRecord, SecretsSource};
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum SecretsCommand {
    /// Print a starting template for a developer's local secrets file
    Template,

    /// Print the parameter-store names a production deployment must provide
    ParameterNames {
        /// Parameter path prefix
        #[arg(long, default_value = DEFAULT_SSM_PATH)]
        prefix: String,
    },

    /// Report which fields the profile's secrets file sets (values are never printed)
    Check,
}

pub fn run(command: SecretsCommand, root: &Path, profile: Profile) -> Result<()> {
    match command {
        SecretsCommand::Template => {
            println!("{}", SecretsRecord::developer_template().to_json_pretty()?);
        }
        SecretsCommand::ParameterNames { prefix } => {
            for name in production_parameter_names(&prefix) {
                println!("{}", name);
            }
        }
        SecretsCommand::Check => run_check(root, profile)?,
    }

    Ok(())
}

fn run_check(root: &Path, profile: Profile) -> Result<()> {
    let source = SecretsSource::for_profile(root, profile);
    let record = source
        .load()
        .with_context(|| format!("Failed to load secrets for profile '{}'", profile))?;

    let present = record.present_fields();
    println!("{}", source.path().display());
    for field in SecretField::ALL {
        let status = if present.contains(&field) {
            "set"
        } else {
            "absent (default used)"
        };
        println!("  {:<20} {}", field.name(), status);
    }
    Ok(())
}
