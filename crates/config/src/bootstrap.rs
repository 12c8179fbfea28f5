//! Placeholder secrets for CI runs.
//!
//! Responsibilities:
//! - Build the placeholder `SecretsRecord` used by automated test pipelines.
//! - Create both secrets files with exclusive-create semantics.
//! - Report the outcome of every file without aborting on the first failure.
//!
//! Does NOT handle:
//! - Loading secrets (see `loader::secrets`).
//! - Real production secrets; those are written by the deploy pipeline.
//!
//! Invariants:
//! - An existing secrets file is never opened for writing, let alone overwritten.
//! - Each target is attempted regardless of what happened to the previous one.
//! - Failures are logged and reported, never returned as errors.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::constants::{LOCAL_SECRETS_FILE, PRODUCTION_SECRETS_FILE};
use crate::types::{SecretField, SecretsRecord};

/// Secrets files written by the bootstrapper, in write order.
pub const BOOTSTRAP_TARGETS: [&str; 2] = [PRODUCTION_SECRETS_FILE, LOCAL_SECRETS_FILE];

/// Placeholder secrets for a CI checkout of `gha_repo_name`.
///
/// The root path mirrors the runner's workspace layout:
/// `/home/runner/work/<repo>/<repo>`.
pub fn ci_placeholder_secrets(gha_repo_name: &str) -> SecretsRecord {
    SecretsRecord::default()
        .with(SecretField::DbDevPassword, "postgrespassword")
        .with(SecretField::JwtAud, "GitHubAction")
        .with(SecretField::JwtIss, "GitHubAction")
        .with(SecretField::JwtSubMain, "main_site")
        .with(SecretField::JwtSubOne, "variation_one")
        .with(
            SecretField::RootPwd,
            format!("/home/runner/work/{gha_repo_name}/{gha_repo_name}"),
        )
        .with(SecretField::SecretCookie, "")
        .with(SecretField::SecretJwt, "secretJWT secret")
        .with(SecretField::SecretKeyMain, "main password")
        .with(SecretField::SecretKeyOne, "password for one")
        .with(SecretField::UseHttpsFromS3, "0")
        .with(SecretField::UseHttpsLocal, "0")
}

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file already existed and was left untouched.
    AlreadyExists,
    /// Creating or writing the file failed for another reason.
    Failed { kind: ErrorKind, message: String },
}

impl BootstrapOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, BootstrapOutcome::Created)
    }
}

impl fmt::Display for BootstrapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapOutcome::Created => f.write_str("created"),
            BootstrapOutcome::AlreadyExists => f.write_str("already exists, left unchanged"),
            BootstrapOutcome::Failed { message, .. } => write!(f, "failed: {message}"),
        }
    }
}

/// Per-file outcomes of one bootstrap run.
#[derive(Debug, Clone, Default)]
pub struct BootstrapReport {
    entries: Vec<(PathBuf, BootstrapOutcome)>,
}

impl BootstrapReport {
    pub fn entries(&self) -> &[(PathBuf, BootstrapOutcome)] {
        &self.entries
    }

    /// Number of files written by this run.
    pub fn created_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_created()).count()
    }

    /// Outcome recorded for `file_name` (e.g. `.secrets.json`).
    pub fn outcome_for(&self, file_name: &str) -> Option<&BootstrapOutcome> {
        self.entries
            .iter()
            .find(|(path, _)| path.file_name().is_some_and(|n| n == file_name))
            .map(|(_, outcome)| outcome)
    }
}

/// Write `record` to both secrets files under `env_dir` unless they exist.
///
/// The directory is created if missing. Every failure is logged with
/// `tracing::error!` and recorded in the report; the next file is still attempted.
pub fn populate_secrets(env_dir: &Path, record: &SecretsRecord) -> BootstrapReport {
    let mut report = BootstrapReport::default();

    let content = match record.to_json_pretty() {
        Ok(mut json) => {
            json.push('\n');
            json
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize placeholder secrets");
            for target in BOOTSTRAP_TARGETS {
                report.entries.push((
                    env_dir.join(target),
                    BootstrapOutcome::Failed {
                        kind: ErrorKind::InvalidData,
                        message: e.to_string(),
                    },
                ));
            }
            return report;
        }
    };

    if let Err(e) = std::fs::create_dir_all(env_dir) {
        tracing::error!(
            path = %env_dir.display(),
            error = %e,
            "Failed to create secrets directory"
        );
    }

    for target in BOOTSTRAP_TARGETS {
        let path = env_dir.join(target);
        let outcome = match create_exclusive(&path, &content) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Populated placeholder secrets");
                BootstrapOutcome::Created
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Error in populating secrets file: file already exists"
                );
                BootstrapOutcome::AlreadyExists
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Error in populating secrets file"
                );
                BootstrapOutcome::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        };
        report.entries.push((path, outcome));
    }

    report
}

/// Create `path` and write `content`, failing if the file already exists.
fn create_exclusive(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
