//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 matches clap's usage-error code.
//! - Bootstrap failures never produce a non-zero exit code.

use appenv_config::ConfigError;

/// Structured exit codes for appenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - invalid arguments or unknown profile.
    UsageError = 2,

    /// The profile's secrets file does not exist.
    ///
    /// Create it from the template, or run `populate-secrets` in CI.
    MissingSecrets = 3,

    /// The secrets file exists but cannot be read or parsed.
    InvalidSecrets = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingSecretsFile { .. } => ExitCode::MissingSecrets,
            ConfigError::SecretsFileRead { .. } | ConfigError::SecretsFileParse { .. } => {
                ExitCode::InvalidSecrets
            }
            ConfigError::InvalidProfile(_) => ExitCode::UsageError,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown
            | ConfigError::Io(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::UsageError.as_i32(), 2);
        assert_eq!(ExitCode::MissingSecrets.as_i32(), 3);
        assert_eq!(ExitCode::InvalidSecrets.as_i32(), 4);
    }

    #[test]
    fn test_missing_secrets_maps_through_context() {
        let err: anyhow::Error = Err::<(), _>(ConfigError::MissingSecretsFile {
            path: PathBuf::from(".env/.secrets.json"),
        })
        .context("Failed to load secrets")
        .unwrap_err();

        assert_eq!(err.exit_code(), ExitCode::MissingSecrets);
    }

    #[test]
    fn test_parse_error_maps_to_invalid_secrets() {
        let err = ConfigError::SecretsFileParse {
            path: PathBuf::from("x.json"),
            line: 1,
            column: 2,
        };
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidSecrets);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
