//! Process environment handling for configuration.
//!
//! Responsibilities:
//! - Read the override variables (`OVERRIDE_PORT`, `OVERRIDE_DB_PORT`, `GHA_REPO_NAME`).
//! - Load an optional `.env` file for the tool itself, gated by `DOTENV_DISABLED`.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Merging overrides into the configuration (see builder.rs).
//! - Reading secrets files (see secrets.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - The process environment is read only by `ProcessOverrides::from_env` and
//!   `load_dotenv`; resolution itself never consults it.

use crate::constants::{DOTENV_DISABLED_VAR, GHA_REPO_NAME_VAR, OVERRIDE_DB_PORT_VAR, OVERRIDE_PORT_VAR};

use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Values supplied by the process environment that take part in resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOverrides {
    /// Replaces the profile's default `PORT`.
    pub port: Option<String>,
    /// Replaces the default `DB_DEV_PORT` (development and test only).
    pub db_port: Option<String>,
    /// Repository name provided by the CI runner.
    pub gha_repo_name: Option<String>,
}

impl ProcessOverrides {
    /// Capture overrides from the current process environment.
    pub fn from_env() -> Self {
        let overrides = Self {
            port: env_var_or_none(OVERRIDE_PORT_VAR),
            db_port: env_var_or_none(OVERRIDE_DB_PORT_VAR),
            gha_repo_name: env_var_or_none(GHA_REPO_NAME_VAR),
        };
        tracing::debug!(
            port = ?overrides.port,
            db_port = ?overrides.db_port,
            gha_repo_name = ?overrides.gha_repo_name,
            "Captured process overrides"
        );
        overrides
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn with_db_port(mut self, port: impl Into<String>) -> Self {
        self.db_port = Some(port.into());
        self
    }

    pub fn with_gha_repo_name(mut self, name: impl Into<String>) -> Self {
        self.gha_repo_name = Some(name.into());
        self
    }
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file in the working directory, if present.
///
/// If `DOTENV_DISABLED` is set to "true" or "1", nothing is loaded.
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
///
/// Missing `.env` files are silently ignored.
///
/// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
