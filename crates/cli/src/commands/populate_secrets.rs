//! Populate-secrets command: write placeholder secrets files for CI.
//!
//! Always succeeds; per-file failures are printed and logged, never returned.

use anyhow::Result;
use appenv_config::constants::SECRETS_DIR;
use appenv_config::{ci_placeholder_secrets, populate_secrets};
use std::path::Path;

pub fn run(root: &Path, gha_repo_name: &str) -> Result<()> {
    if gha_repo_name.trim().is_empty() {
        tracing::warn!("GHA_REPO_NAME is empty; placeholder rootPwd will be incomplete");
    }

    let env_dir = root.join(SECRETS_DIR);
    let report = populate_secrets(&env_dir, &ci_placeholder_secrets(gha_repo_name.trim()));

    for (path, outcome) in report.entries() {
        println!("{}: {}", path.display(), outcome);
    }

    tracing::info!(
        created = report.created_count(),
        total = report.entries().len(),
        "Secrets bootstrap finished"
    );
    Ok(())
}
