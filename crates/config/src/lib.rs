//! Environment configuration for the web application.
//!
//! This crate resolves one flat configuration map per runtime profile
//! (development, test, production) from common defaults, environment flags,
//! process overrides, and a secrets file, and bootstraps placeholder secrets
//! files for CI.

pub mod bootstrap;
pub mod constants;
mod loader;
pub mod parameter_store;
pub mod types;

pub use bootstrap::{BootstrapOutcome, BootstrapReport, ci_placeholder_secrets, populate_secrets};
pub use loader::{
    ConfigError, ConfigResolver, ProcessOverrides, SecretsSource, common_defaults,
    env_var_or_none, environment_flags, load_dotenv,
};
pub use types::{ConfigMap, ConfigValue, Profile, SecretField, SecretsRecord};
