//! Resolve command: print the configuration map for one profile.

use anyhow::{Context, Result};
use appenv_config::{ConfigResolver, Profile, SecretsSource};
use std::path::{Path, PathBuf};

use crate::formatters::{OutputFormat, format_config};

pub fn run(
    root: &Path,
    profile: Profile,
    output: &str,
    reveal: bool,
    secrets_file: Option<PathBuf>,
) -> Result<()> {
    // Validate output format before touching the filesystem
    let format = OutputFormat::from_str(output)?;

    let source = match secrets_file {
        Some(path) => SecretsSource::new(path),
        None => SecretsSource::for_profile(root, profile),
    };

    let resolver = ConfigResolver::new(profile)
        .from_env()
        .from_secrets_file(&source)
        .with_context(|| format!("Failed to load secrets for profile '{}'", profile))?;

    let resolved = resolver.resolve();
    let shown = if reveal {
        tracing::warn!(profile = %profile, "Printing unmasked secret values");
        resolved
    } else {
        resolved.masked()
    };

    print!("{}", format_config(&shown, format)?);
    Ok(())
}
