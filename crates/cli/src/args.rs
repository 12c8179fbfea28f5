//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration (see `appenv_config`).

use appenv_config::Profile;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "appenv")]
#[command(
    about = "appenv - Resolve per-environment configuration and bootstrap secrets files",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  appenv resolve\n  appenv --profile production resolve --output env\n  OVERRIDE_PORT=5000 appenv resolve --output table\n  GHA_REPO_NAME=my-app appenv populate-secrets\n  appenv secrets parameter-names --prefix /my-app/prod/\n"
)]
pub struct Cli {
    /// Project root containing the `.env/` secrets directory
    #[arg(long, global = true, env = "APPENV_ROOT", default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Runtime profile (development, test, production)
    #[arg(
        short = 'P',
        long,
        global = true,
        env = "APP_PROFILE",
        default_value = "development"
    )]
    pub profile: Profile,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, env = "APPENV_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and print the configuration for the selected profile
    Resolve {
        /// Output format (json, yaml, env, table)
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Print secret values instead of masking them
        #[arg(long)]
        reveal: bool,

        /// Read secrets from this file instead of the profile's default location
        #[arg(long, value_name = "FILE")]
        secrets_file: Option<PathBuf>,
    },

    /// Create placeholder secrets files for CI (existing files are never overwritten)
    PopulateSecrets {
        /// Repository name used to build the placeholder root path
        #[arg(long, env = "GHA_REPO_NAME", default_value = "")]
        gha_repo_name: String,
    },

    /// Secrets file helpers
    Secrets {
        #[command(subcommand)]
        command: commands::secrets::SecretsCommand,
    },
}
