//! Configuration resolver builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigResolver` that layers configuration sources.
//! - Compute derived values (ports, local URLs) from overrides and secrets.
//! - Apply the per-field secret fallback table.
//!
//! Does NOT handle:
//! - Reading the process environment (delegated to env.rs).
//! - Reading secrets files (delegated to secrets.rs).
//! - Injecting the result into a running application.
//!
//! Invariants / Assumptions:
//! - Merge order, lowest to highest: common defaults, environment flags,
//!   computed values (with process overrides), secrets, `TRUE_ENV`.
//! - Every key of the defaults table is present in the resolved map.
//! - An absent secret falls back to its table default; an empty string is kept.
//! - `resolve()` is pure: identical inputs always produce identical maps.

use super::defaults::{common_defaults, environment_flags};
use super::env::ProcessOverrides;
use super::error::ConfigError;
use super::secrets::SecretsSource;
use crate::constants::{
    DEFAULT_DB_PORT, DEFAULT_HTTP_PORT, DEFAULT_HTTPS_PORT, DEFAULT_LOCAL_PORT,
    DEFAULT_LOCAL_ROOT_PWD, DEFAULT_PRODUCTION_ROOT_PWD, FRONTEND_DEV_PORT,
};
use crate::types::{ConfigMap, ConfigValue, Profile, SecretField, SecretsRecord};

/// Secret-backed keys shared by every profile: (config key, secret field, fallback).
const SHARED_SECRET_KEYS: &[(&str, SecretField, &str)] = &[
    ("JWT_AUD", SecretField::JwtAud, ""),
    ("JWT_ISS", SecretField::JwtIss, ""),
    ("JWT_SUB_MAIN", SecretField::JwtSubMain, ""),
    ("JWT_SUB_ONE", SecretField::JwtSubOne, ""),
    ("SECRET_COOKIE", SecretField::SecretCookie, ""),
    ("SECRET_JWT", SecretField::SecretJwt, ""),
    ("SECRET_KEY_MAIN", SecretField::SecretKeyMain, ""),
    ("SECRET_KEY_ONE", SecretField::SecretKeyOne, ""),
    ("USE_DATABASE", SecretField::UseDatabase, "0"),
    ("USE_HTTPS_FROM_S3", SecretField::UseHttpsFromS3, ""),
    ("USE_HTTPS_LOCAL", SecretField::UseHttpsLocal, "0"),
    ("USE_NEXTKEY", SecretField::UseNextKey, "1"),
];

/// Secret-backed keys for development and test.
const LOCAL_SECRET_KEYS: &[(&str, SecretField, &str)] = &[
    ("DB_DEV_PASSWORD", SecretField::DbDevPassword, ""),
    ("ROOT_PWD", SecretField::RootPwd, DEFAULT_LOCAL_ROOT_PWD),
];

/// Secret-backed keys for production.
const PRODUCTION_SECRET_KEYS: &[(&str, SecretField, &str)] = &[
    ("DB_PROD_DATABASE_NAME", SecretField::DbProdDatabaseName, ""),
    ("DB_PROD_HOST", SecretField::DbProdHost, ""),
    ("DB_PROD_PASSWORD", SecretField::DbProdPassword, ""),
    ("DB_PROD_PORT", SecretField::DbProdPort, ""),
    ("DB_PROD_USER", SecretField::DbProdUser, ""),
    ("HOSTNAME", SecretField::Hostname, ""),
    ("ROOT_PWD", SecretField::RootPwd, DEFAULT_PRODUCTION_ROOT_PWD),
];

/// Resolves the flat configuration map for one profile.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    profile: Profile,
    defaults: ConfigMap,
    flags: ConfigMap,
    secrets: SecretsRecord,
    overrides: ProcessOverrides,
}

impl ConfigResolver {
    /// Create a resolver for `profile` with the built-in tables, no secrets,
    /// and no process overrides.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            defaults: common_defaults(),
            flags: environment_flags(profile),
            secrets: SecretsRecord::default(),
            overrides: ProcessOverrides::default(),
        }
    }

    /// Replace the common defaults table.
    pub fn with_defaults(mut self, defaults: ConfigMap) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the environment flags table.
    pub fn with_flags(mut self, flags: ConfigMap) -> Self {
        self.flags = flags;
        self
    }

    /// Set the secrets record.
    pub fn with_secrets(mut self, secrets: SecretsRecord) -> Self {
        self.secrets = secrets;
        self
    }

    /// Set the process overrides.
    pub fn with_overrides(mut self, overrides: ProcessOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Capture process overrides from the environment.
    pub fn from_env(mut self) -> Self {
        self.overrides = ProcessOverrides::from_env();
        self
    }

    /// Load secrets from `source`.
    ///
    /// A missing file is returned as `ConfigError::MissingSecretsFile`.
    pub fn from_secrets_file(mut self, source: &SecretsSource) -> Result<Self, ConfigError> {
        self.secrets = source.load()?;
        Ok(self)
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn secrets(&self) -> &SecretsRecord {
        &self.secrets
    }

    pub fn overrides(&self) -> &ProcessOverrides {
        &self.overrides
    }

    /// Build the final configuration map.
    pub fn resolve(&self) -> ConfigMap {
        let mut resolved = self.defaults.clone();
        resolved.overlay(&self.flags);
        resolved.overlay(&self.computed_values());
        resolved.overlay(&self.secret_values());
        resolved.insert("TRUE_ENV", self.profile.as_str());

        tracing::debug!(
            profile = %self.profile,
            keys = resolved.len(),
            port = resolved.get_str("PORT").unwrap_or_default(),
            "Resolved configuration"
        );

        resolved
    }

    /// The resolved `PORT` value.
    ///
    /// `OVERRIDE_PORT` wins; otherwise development/test use 3000 and production
    /// uses 443 when TLS comes from S3, else 80.
    pub fn port(&self) -> String {
        if let Some(port) = &self.overrides.port {
            return port.clone();
        }
        match self.profile {
            Profile::Development | Profile::Test => DEFAULT_LOCAL_PORT.to_string(),
            Profile::Production => {
                if self.secrets.get(SecretField::UseHttpsFromS3) == Some("1") {
                    DEFAULT_HTTPS_PORT.to_string()
                } else {
                    DEFAULT_HTTP_PORT.to_string()
                }
            }
        }
    }

    fn computed_values(&self) -> ConfigMap {
        let mut computed = ConfigMap::new();
        let port = self.port();

        if let Some(repo) = &self.overrides.gha_repo_name {
            computed.insert("GHA_REPO_NAME", repo.as_str());
        }

        if self.profile.uses_local_database() {
            let db_port = self
                .overrides
                .db_port
                .as_deref()
                .unwrap_or(DEFAULT_DB_PORT);
            computed.insert("DB_DEV_DATABASE_NAME", "my_app_db");
            computed.insert("DB_DEV_HOST", "host.docker.internal");
            computed.insert("DB_DEV_PORT", db_port);
            computed.insert("DB_DEV_USER", "my_app_user");
        }

        computed.insert("NEXT_PUBLIC_API_MOCKING", "disabled");

        if self.profile == Profile::Test {
            let scheme = if self.secrets.get(SecretField::UseHttpsLocal) == Some("1") {
                "https"
            } else {
                "http"
            };
            computed.insert("NODE_TLS_REJECT_UNAUTHORIZED", "0");
            computed.insert("URL_DEV", format!("http://localhost:{FRONTEND_DEV_PORT}"));
            computed.insert("URL_LOCAL", format!("{scheme}://localhost:{port}"));
        }

        computed.insert("PORT", port);
        computed
    }

    fn secret_values(&self) -> ConfigMap {
        let profile_keys = match self.profile {
            Profile::Development | Profile::Test => LOCAL_SECRET_KEYS,
            Profile::Production => PRODUCTION_SECRET_KEYS,
        };

        SHARED_SECRET_KEYS
            .iter()
            .chain(profile_keys)
            .map(|(key, field, fallback)| {
                let value = self.secrets.get(*field).unwrap_or(*fallback);
                (key.to_string(), ConfigValue::from(value))
            })
            .collect()
    }
}
