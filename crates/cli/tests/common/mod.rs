//! Shared test utilities for appenv integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write secrets files into a temporary project root.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Process overrides from the host (`OVERRIDE_*`, `GHA_REPO_NAME`) never leak in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `appenv` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Override and selection env vars are cleared to ensure no leakage from the host.
pub fn appenv_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("appenv");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("OVERRIDE_PORT")
        .env_remove("OVERRIDE_DB_PORT")
        .env_remove("GHA_REPO_NAME")
        .env_remove("APP_PROFILE")
        .env_remove("APPENV_ROOT")
        .env_remove("APPENV_LOG_JSON")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `json` to `<root>/.env/<file_name>` and return its path.
#[allow(dead_code)]
pub fn write_secrets(root: &Path, file_name: &str, json: &str) -> PathBuf {
    let dir = root.join(".env");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, json).unwrap();
    path
}

/// A complete local secrets file.
#[allow(dead_code)]
pub const LOCAL_SECRETS: &str = r#"{
  "dbDevPassword": "local-db-pass",
  "jwtAud": "localhost",
  "jwtIss": "localhost",
  "jwtSubMain": "main_site",
  "jwtSubOne": "variation_one",
  "rootPwd": "/work/my-app",
  "secretCookie": "cookie-secret",
  "secretJWT": "jwt-secret",
  "secretKeyMain": "main password",
  "secretKeyOne": "password for one",
  "useHttpsLocal": "0"
}"#;
