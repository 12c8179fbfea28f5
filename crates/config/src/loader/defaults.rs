//! Static configuration tables.
//!
//! Responsibilities:
//! - Define the common defaults shared by every profile.
//! - Define the per-profile environment flag overrides.
//!
//! Does NOT handle:
//! - Process overrides or secrets (see builder.rs).
//!
//! Invariants:
//! - Every key in `common_defaults()` is present in every resolved map.
//! - `JWT_EXP_IN_SEC` is the only numeric value.

use crate::constants::{DEFAULT_JWT_EXP_IN_SEC, DEFAULT_SSM_PATH, DEVELOPMENT_JWT_EXP_IN_SEC};
use crate::types::{ConfigMap, Profile};

/// Baseline values shared by all profiles.
pub fn common_defaults() -> ConfigMap {
    let mut map = ConfigMap::new();
    map.insert("GHA_REPO_NAME", "");
    map.insert("HOSTNAME", "localhost");
    map.insert("JWT_ALG", "HS512");
    map.insert("JWT_AUD", "");
    map.insert("JWT_EXP_IN_SEC", DEFAULT_JWT_EXP_IN_SEC);
    map.insert("JWT_ISS", "");
    map.insert("JWT_NAME", "access_token");
    map.insert("JWT_SUB_MAIN", "");
    map.insert("JWT_SUB_ONE", "");
    map.insert("KEY_NAME", "theKey");
    map.insert("LOCKPAGE_EXPORT_DIR", "lockpage/export");
    map.insert("LOCKPAGE_PUBLIC_DIR", "lockpage/public");
    map.insert("NEXT_PUBLIC_LOGIN_PATH", "/welcome/");
    map.insert("NODE_TLS_REJECT_UNAUTHORIZED", "1");
    map.insert("REGION", "us-west-2");
    map.insert("ROOT_PWD", ".");
    map.insert("SECRET_COOKIE", "");
    map.insert("SECRET_JWT", "");
    map.insert("SECRET_KEY_MAIN", "");
    map.insert("SECRET_KEY_ONE", "");
    map.insert("SSM_PATH", DEFAULT_SSM_PATH);
    map.insert("USE_DATABASE", "");
    map.insert("USE_HTTPS_FROM_S3", "");
    map.insert("USE_HTTPS_LOCAL", "0");
    map
}

/// Feature-flag overrides for `profile`.
pub fn environment_flags(profile: Profile) -> ConfigMap {
    let mut map = ConfigMap::new();
    map.insert("NEXT_TELEMETRY_DISABLED", "1");
    match profile {
        Profile::Development => {
            map.insert("LOG_LEVEL", "debug");
            map.insert("JWT_EXP_IN_SEC", DEVELOPMENT_JWT_EXP_IN_SEC);
        }
        Profile::Test => {
            map.insert("LOG_LEVEL", "warn");
        }
        Profile::Production => {
            map.insert("LOG_LEVEL", "info");
        }
    }
    map
}
