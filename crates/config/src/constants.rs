//! Centralized constants for the appenv workspace.
//!
//! This module contains file locations, fallback values, and environment
//! variable names used across crates to avoid magic string duplication.

// =============================================================================
// Secrets File Locations
// =============================================================================

/// Directory (relative to the project root) holding the secrets files.
pub const SECRETS_DIR: &str = ".env";

/// Secrets file used by the development and test profiles.
pub const LOCAL_SECRETS_FILE: &str = ".secrets.json";

/// Secrets file used by the production profile, written by the deploy script.
pub const PRODUCTION_SECRETS_FILE: &str = ".production.secrets.json";

// =============================================================================
// Process Override Variables
// =============================================================================

/// Overrides the resolved `PORT` for every profile.
pub const OVERRIDE_PORT_VAR: &str = "OVERRIDE_PORT";

/// Overrides the resolved `DB_DEV_PORT` for development and test.
pub const OVERRIDE_DB_PORT_VAR: &str = "OVERRIDE_DB_PORT";

/// Repository name supplied by the CI runner.
pub const GHA_REPO_NAME_VAR: &str = "GHA_REPO_NAME";

/// Disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Network Defaults
// =============================================================================

/// Application port for development and test.
pub const DEFAULT_LOCAL_PORT: &str = "3000";

/// Production port when TLS is terminated by the app.
pub const DEFAULT_HTTPS_PORT: &str = "443";

/// Production port without TLS.
pub const DEFAULT_HTTP_PORT: &str = "80";

/// Local database port for development and test.
pub const DEFAULT_DB_PORT: &str = "5432";

/// Port of the standalone frontend dev server used by the test profile.
pub const FRONTEND_DEV_PORT: &str = "4000";

// =============================================================================
// Filesystem Defaults
// =============================================================================

/// Project root fallback for development and test.
pub const DEFAULT_LOCAL_ROOT_PWD: &str = ".";

/// Project root fallback for production hosts.
pub const DEFAULT_PRODUCTION_ROOT_PWD: &str = "/home/ubuntu/server/my-app";

// =============================================================================
// Parameter Store
// =============================================================================

/// Default path prefix for production parameters.
pub const DEFAULT_SSM_PATH: &str = "/my-app/prod/";

// =============================================================================
// Token Defaults
// =============================================================================

/// Default JWT lifetime in seconds (1 week).
pub const DEFAULT_JWT_EXP_IN_SEC: u64 = 604_800;

/// JWT lifetime used while developing (1 day).
pub const DEVELOPMENT_JWT_EXP_IN_SEC: u64 = 86_400;
