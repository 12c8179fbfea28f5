//! Secrets record types.
//!
//! Responsibilities:
//! - Define the set of secret names a secrets file may carry.
//! - Hold secret values with `secrecy::SecretString` for passwords and signing keys.
//! - Handle serialization of the secrets file format (camelCase JSON object).
//!
//! Does NOT handle:
//! - Locating or reading secrets files (see `loader::secrets`).
//! - Writing placeholder files (see `bootstrap`).
//!
//! Invariants:
//! - An absent field (`None`) is distinct from an empty string.
//! - Sensitive values never show up in `Debug` output.
//! - Unknown fields in a secrets file are ignored.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Module for serializing optional SecretString values as plain strings.
mod secret_string_opt {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret
            .as_ref()
            .map(|s| s.expose_secret())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Name of a single entry in a secrets file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretField {
    DbDevPassword,
    DbProdDatabaseName,
    DbProdHost,
    DbProdPassword,
    DbProdPort,
    DbProdUser,
    GhaRepoName,
    Hostname,
    JwtAud,
    JwtIss,
    JwtSubMain,
    JwtSubOne,
    RootPwd,
    SecretCookie,
    SecretJwt,
    SecretKeyMain,
    SecretKeyOne,
    UseDatabase,
    UseHttpsFromS3,
    UseHttpsLocal,
    UseNextKey,
}

impl SecretField {
    pub const ALL: [SecretField; 21] = [
        SecretField::DbDevPassword,
        SecretField::DbProdDatabaseName,
        SecretField::DbProdHost,
        SecretField::DbProdPassword,
        SecretField::DbProdPort,
        SecretField::DbProdUser,
        SecretField::GhaRepoName,
        SecretField::Hostname,
        SecretField::JwtAud,
        SecretField::JwtIss,
        SecretField::JwtSubMain,
        SecretField::JwtSubOne,
        SecretField::RootPwd,
        SecretField::SecretCookie,
        SecretField::SecretJwt,
        SecretField::SecretKeyMain,
        SecretField::SecretKeyOne,
        SecretField::UseDatabase,
        SecretField::UseHttpsFromS3,
        SecretField::UseHttpsLocal,
        SecretField::UseNextKey,
    ];

    /// The field name as written in secrets files and parameter names.
    pub const fn name(self) -> &'static str {
        match self {
            SecretField::DbDevPassword => "dbDevPassword",
            SecretField::DbProdDatabaseName => "dbProdDatabaseName",
            SecretField::DbProdHost => "dbProdHost",
            SecretField::DbProdPassword => "dbProdPassword",
            SecretField::DbProdPort => "dbProdPort",
            SecretField::DbProdUser => "dbProdUser",
            SecretField::GhaRepoName => "ghaRepoName",
            SecretField::Hostname => "hostname",
            SecretField::JwtAud => "jwtAud",
            SecretField::JwtIss => "jwtIss",
            SecretField::JwtSubMain => "jwtSubMain",
            SecretField::JwtSubOne => "jwtSubOne",
            SecretField::RootPwd => "rootPwd",
            SecretField::SecretCookie => "secretCookie",
            SecretField::SecretJwt => "secretJWT",
            SecretField::SecretKeyMain => "secretKeyMain",
            SecretField::SecretKeyOne => "secretKeyOne",
            SecretField::UseDatabase => "useDatabase",
            SecretField::UseHttpsFromS3 => "useHttpsFromS3",
            SecretField::UseHttpsLocal => "useHttpsLocal",
            SecretField::UseNextKey => "useNextKey",
        }
    }

    /// Passwords and signing keys; held as `SecretString`.
    pub const fn is_sensitive(self) -> bool {
        matches!(
            self,
            SecretField::DbDevPassword
                | SecretField::DbProdPassword
                | SecretField::SecretCookie
                | SecretField::SecretJwt
                | SecretField::SecretKeyMain
                | SecretField::SecretKeyOne
        )
    }
}

/// Values read from a secrets file.
///
/// Every field is optional; the resolver supplies a fallback for each.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretsRecord {
    #[serde(with = "secret_string_opt", skip_serializing_if = "Option::is_none")]
    pub db_dev_password: Option<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_prod_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_prod_host: Option<String>,
    #[serde(with = "secret_string_opt", skip_serializing_if = "Option::is_none")]
    pub db_prod_password: Option<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_prod_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_prod_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gha_repo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_iss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_sub_main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_sub_one: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_pwd: Option<String>,
    #[serde(with = "secret_string_opt", skip_serializing_if = "Option::is_none")]
    pub secret_cookie: Option<SecretString>,
    #[serde(
        rename = "secretJWT",
        with = "secret_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub secret_jwt: Option<SecretString>,
    #[serde(with = "secret_string_opt", skip_serializing_if = "Option::is_none")]
    pub secret_key_main: Option<SecretString>,
    #[serde(with = "secret_string_opt", skip_serializing_if = "Option::is_none")]
    pub secret_key_one: Option<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_https_from_s3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_https_local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_next_key: Option<String>,
}

impl SecretsRecord {
    /// Current value of `field`, with secrets exposed.
    pub fn get(&self, field: SecretField) -> Option<&str> {
        fn plain(v: &Option<String>) -> Option<&str> {
            v.as_deref()
        }
        fn secret(v: &Option<SecretString>) -> Option<&str> {
            v.as_ref().map(|s| s.expose_secret())
        }

        match field {
            SecretField::DbDevPassword => secret(&self.db_dev_password),
            SecretField::DbProdDatabaseName => plain(&self.db_prod_database_name),
            SecretField::DbProdHost => plain(&self.db_prod_host),
            SecretField::DbProdPassword => secret(&self.db_prod_password),
            SecretField::DbProdPort => plain(&self.db_prod_port),
            SecretField::DbProdUser => plain(&self.db_prod_user),
            SecretField::GhaRepoName => plain(&self.gha_repo_name),
            SecretField::Hostname => plain(&self.hostname),
            SecretField::JwtAud => plain(&self.jwt_aud),
            SecretField::JwtIss => plain(&self.jwt_iss),
            SecretField::JwtSubMain => plain(&self.jwt_sub_main),
            SecretField::JwtSubOne => plain(&self.jwt_sub_one),
            SecretField::RootPwd => plain(&self.root_pwd),
            SecretField::SecretCookie => secret(&self.secret_cookie),
            SecretField::SecretJwt => secret(&self.secret_jwt),
            SecretField::SecretKeyMain => secret(&self.secret_key_main),
            SecretField::SecretKeyOne => secret(&self.secret_key_one),
            SecretField::UseDatabase => plain(&self.use_database),
            SecretField::UseHttpsFromS3 => plain(&self.use_https_from_s3),
            SecretField::UseHttpsLocal => plain(&self.use_https_local),
            SecretField::UseNextKey => plain(&self.use_next_key),
        }
    }

    /// Set `field` to `value`.
    pub fn set(&mut self, field: SecretField, value: impl Into<String>) {
        fn secret(v: String) -> Option<SecretString> {
            Some(SecretString::new(v.into()))
        }

        let value = value.into();
        match field {
            SecretField::DbDevPassword => self.db_dev_password = secret(value),
            SecretField::DbProdDatabaseName => self.db_prod_database_name = Some(value),
            SecretField::DbProdHost => self.db_prod_host = Some(value),
            SecretField::DbProdPassword => self.db_prod_password = secret(value),
            SecretField::DbProdPort => self.db_prod_port = Some(value),
            SecretField::DbProdUser => self.db_prod_user = Some(value),
            SecretField::GhaRepoName => self.gha_repo_name = Some(value),
            SecretField::Hostname => self.hostname = Some(value),
            SecretField::JwtAud => self.jwt_aud = Some(value),
            SecretField::JwtIss => self.jwt_iss = Some(value),
            SecretField::JwtSubMain => self.jwt_sub_main = Some(value),
            SecretField::JwtSubOne => self.jwt_sub_one = Some(value),
            SecretField::RootPwd => self.root_pwd = Some(value),
            SecretField::SecretCookie => self.secret_cookie = secret(value),
            SecretField::SecretJwt => self.secret_jwt = secret(value),
            SecretField::SecretKeyMain => self.secret_key_main = secret(value),
            SecretField::SecretKeyOne => self.secret_key_one = secret(value),
            SecretField::UseDatabase => self.use_database = Some(value),
            SecretField::UseHttpsFromS3 => self.use_https_from_s3 = Some(value),
            SecretField::UseHttpsLocal => self.use_https_local = Some(value),
            SecretField::UseNextKey => self.use_next_key = Some(value),
        }
    }

    /// Builder form of [`SecretsRecord::set`].
    pub fn with(mut self, field: SecretField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields present in this record, in declaration order.
    pub fn present_fields(&self) -> Vec<SecretField> {
        SecretField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    /// Starting point for a developer's local secrets file.
    pub fn developer_template() -> Self {
        SecretsRecord::default()
            .with(SecretField::Hostname, "localhost")
            .with(SecretField::JwtAud, "localhost")
            .with(SecretField::JwtIss, "localhost")
            .with(SecretField::JwtSubMain, "main_site")
            .with(SecretField::JwtSubOne, "variation_one")
            .with(SecretField::SecretCookie, "")
            .with(SecretField::SecretJwt, "secretJWT secret")
            .with(SecretField::SecretKeyMain, "main password")
            .with(SecretField::SecretKeyOne, "password for one")
            .with(SecretField::UseDatabase, "0")
            .with(SecretField::UseNextKey, "1")
            .with(SecretField::DbDevPassword, "change_this_password_right_away!")
            .with(SecretField::GhaRepoName, "")
            .with(SecretField::RootPwd, "")
            .with(SecretField::UseHttpsFromS3, "")
            .with(SecretField::UseHttpsLocal, "0")
    }

    /// Serialize as the pretty-printed JSON secrets file format.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
