//! Configuration data types.
//!
//! Responsibilities:
//! - Re-export the profile, config map, and secrets record types.
//!
//! Does NOT handle:
//! - Loading or merging configuration (see `loader`).

mod config_map;
mod profile;
mod secrets;

pub use config_map::{ConfigMap, ConfigValue, MASKED_VALUE, is_secret_key};
pub use profile::Profile;
pub use secrets::{SecretField, SecretsRecord};
