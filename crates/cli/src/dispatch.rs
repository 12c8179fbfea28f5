//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Pass global options (root, profile) to the handlers that need them.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve {
            output,
            reveal,
            secrets_file,
        } => {
            commands::resolve::run(&cli.root, cli.profile, &output, reveal, secrets_file)?;
        }
        Commands::PopulateSecrets { gha_repo_name } => {
            commands::populate_secrets::run(&cli.root, &gha_repo_name)?;
        }
        Commands::Secrets { command } => {
            commands::secrets::run(command, &cli.root, cli.profile)?;
        }
    }

    Ok(())
}
