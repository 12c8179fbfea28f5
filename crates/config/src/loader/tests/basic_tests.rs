//! Basic resolver tests.
//!
//! Responsibilities:
//! - Test resolver construction and the identity tag.
//! - Test that resolution is repeatable.

use crate::loader::builder::ConfigResolver;
use crate::loader::env::ProcessOverrides;
use crate::types::{ConfigValue, Profile, SecretField, SecretsRecord};

#[test]
fn test_true_env_matches_profile() {
    for profile in Profile::ALL {
        let resolved = ConfigResolver::new(profile).resolve();
        assert_eq!(resolved.get_str("TRUE_ENV"), Some(profile.as_str()));
    }
}

#[test]
fn test_resolve_is_repeatable() {
    let resolver = ConfigResolver::new(Profile::Test)
        .with_secrets(SecretsRecord::developer_template())
        .with_overrides(ProcessOverrides::default().with_port("8080"));

    let first = resolver.resolve();
    let second = resolver.resolve();
    assert_eq!(first, second);
}

#[test]
fn test_jwt_expiry_stays_numeric() {
    let resolved = ConfigResolver::new(Profile::Production).resolve();
    assert_eq!(
        resolved.get("JWT_EXP_IN_SEC"),
        Some(&ConfigValue::Number(604_800))
    );

    let resolved = ConfigResolver::new(Profile::Development).resolve();
    assert_eq!(
        resolved.get("JWT_EXP_IN_SEC"),
        Some(&ConfigValue::Number(86_400))
    );
}

#[test]
fn test_resolver_exposes_inputs() {
    let resolver = ConfigResolver::new(Profile::Production)
        .with_secrets(SecretsRecord::default().with(SecretField::Hostname, "example.com"));

    assert_eq!(resolver.profile(), Profile::Production);
    assert_eq!(resolver.secrets().get(SecretField::Hostname), Some("example.com"));
    assert_eq!(resolver.overrides(), &ProcessOverrides::default());
}

#[test]
fn test_production_has_no_local_database_keys() {
    let resolved = ConfigResolver::new(Profile::Production).resolve();
    assert!(!resolved.contains_key("DB_DEV_PORT"));
    assert!(resolved.contains_key("DB_PROD_PORT"));

    let resolved = ConfigResolver::new(Profile::Development).resolve();
    assert!(resolved.contains_key("DB_DEV_PORT"));
    assert!(!resolved.contains_key("DB_PROD_PORT"));
}
