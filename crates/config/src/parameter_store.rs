//! Parameter-store naming for production secrets.
//!
//! Production secrets live in a cloud parameter store instead of a local file.
//! Every parameter is namespaced under the `SSM_PATH` prefix, e.g.
//! `/my-app/prod/jwtSubMain`. Nothing here talks to the store; these helpers
//! only produce the names a deployment must provide.

use crate::types::SecretField;

/// Secrets a production deployment must store, in the order operators usually add them.
pub const PRODUCTION_PARAMETERS: [SecretField; 15] = [
    SecretField::Hostname,
    SecretField::JwtAud,
    SecretField::JwtIss,
    SecretField::JwtSubMain,
    SecretField::JwtSubOne,
    SecretField::SecretCookie,
    SecretField::SecretJwt,
    SecretField::SecretKeyMain,
    SecretField::SecretKeyOne,
    SecretField::UseDatabase,
    SecretField::UseNextKey,
    SecretField::DbProdDatabaseName,
    SecretField::DbProdPassword,
    SecretField::DbProdPort,
    SecretField::DbProdUser,
];

/// Full parameter name for `field` under `prefix`.
///
/// A missing trailing `/` on the prefix is added.
pub fn parameter_name(prefix: &str, field: SecretField) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}{}", field.name())
    } else {
        format!("{prefix}/{}", field.name())
    }
}

/// Names of every production parameter under `prefix`.
pub fn production_parameter_names(prefix: &str) -> Vec<String> {
    PRODUCTION_PARAMETERS
        .into_iter()
        .map(|field| parameter_name(prefix, field))
        .collect()
}
