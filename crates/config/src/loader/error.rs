//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for secrets file, profile, and dotenv failures.
//!
//! Does NOT handle:
//! - Bootstrap write failures; those are reported per file (see bootstrap.rs).
//! - Missing secret fields; the resolver defaults them instead of failing.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, positions, names).
//! - No variant ever carries raw secrets or dotenv file content.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The secrets file does not exist. Startup cannot continue without it.
    #[error(
        "Secrets file not found at {path}. Copy the template (`appenv secrets template`) or run `appenv populate-secrets` in CI"
    )]
    MissingSecretsFile { path: PathBuf },

    #[error("Failed to read secrets file at {path}: {kind}")]
    SecretsFileRead { path: PathBuf, kind: ErrorKind },

    /// SAFETY: only the position is reported, never the offending content.
    #[error("Failed to parse secrets file at {path} (line {line}, column {column})")]
    SecretsFileParse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Unknown profile '{0}'. Expected one of: development, test, production")]
    InvalidProfile(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
