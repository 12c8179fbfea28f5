//! Secrets file loading.
//!
//! Responsibilities:
//! - Locate the secrets file for a profile under a project root.
//! - Read and parse the file into a `SecretsRecord`.
//!
//! Does NOT handle:
//! - Defaulting absent fields (see builder.rs).
//! - Creating secrets files (see bootstrap.rs).
//!
//! Invariants:
//! - A missing file is reported as `ConfigError::MissingSecretsFile`; callers treat it as fatal.
//! - Parse errors report line/column only and never echo file content.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::SECRETS_DIR;
use crate::types::{Profile, SecretsRecord};

/// Location of the secrets file a profile reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsSource {
    path: PathBuf,
}

impl SecretsSource {
    /// Secrets source at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Secrets source for `profile` under the project `root`.
    ///
    /// Development and test read `<root>/.env/.secrets.json`; production reads
    /// `<root>/.env/.production.secrets.json`.
    pub fn for_profile(root: &Path, profile: Profile) -> Self {
        Self::new(root.join(SECRETS_DIR).join(profile.secrets_file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the secrets file.
    pub fn load(&self) -> Result<SecretsRecord, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::MissingSecretsFile {
                path: self.path.clone(),
            },
            kind => ConfigError::SecretsFileRead {
                path: self.path.clone(),
                kind,
            },
        })?;

        let record: SecretsRecord =
            serde_json::from_str(&content).map_err(|e| ConfigError::SecretsFileParse {
                path: self.path.clone(),
                line: e.line(),
                column: e.column(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            fields = record.present_fields().len(),
            "Loaded secrets file"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SecretField;
    use tempfile::TempDir;

    #[test]
    fn test_for_profile_paths() {
        let root = Path::new("/srv/app");
        assert_eq!(
            SecretsSource::for_profile(root, Profile::Test).path(),
            Path::new("/srv/app/.env/.secrets.json")
        );
        assert_eq!(
            SecretsSource::for_profile(root, Profile::Production).path(),
            Path::new("/srv/app/.env/.production.secrets.json")
        );
    }

    #[test]
    fn test_load_missing_file_is_missing_secrets_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = SecretsSource::for_profile(temp_dir.path(), Profile::Development);

        let err = source.load().unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecretsFile { ref path } if path == source.path()));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_parses_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secrets.json");
        std::fs::write(&path, r#"{"jwtIss": "example.com", "secretCookie": ""}"#).unwrap();

        let record = SecretsSource::new(&path).load().unwrap();
        assert_eq!(record.get(SecretField::JwtIss), Some("example.com"));
        assert_eq!(record.get(SecretField::SecretCookie), Some(""));
        assert_eq!(record.get(SecretField::SecretJwt), None);
    }

    #[test]
    fn test_parse_error_does_not_leak_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secrets.json");
        std::fs::write(&path, "{\"secretJWT\": \"leaky-value-42\",\n oops }").unwrap();

        let err = SecretsSource::new(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::SecretsFileParse { line: 2, .. }));
        assert!(!err.to_string().contains("leaky-value-42"));
    }
}
