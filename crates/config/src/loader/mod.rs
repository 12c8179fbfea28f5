//! Configuration resolution from layered sources.
//!
//! Responsibilities:
//! - Provide the static defaults and environment flag tables.
//! - Load secrets files and capture process overrides.
//! - Provide a builder-pattern `ConfigResolver` that merges everything into one `ConfigMap`.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing secrets files (see `bootstrap`).
//! - Output formatting of the resolved map (see the CLI crate).
//!
//! Invariants / Assumptions:
//! - Later layers win: defaults < flags < computed/overrides < secrets < `TRUE_ENV`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - A missing secrets file is fatal; a missing secret field is not.

mod builder;
mod defaults;
mod env;
mod error;
mod secrets;

#[cfg(test)]
mod tests;

pub use builder::ConfigResolver;
pub use defaults::{common_defaults, environment_flags};
pub use env::{ProcessOverrides, env_var_or_none, load_dotenv};
pub use error::ConfigError;
pub use secrets::SecretsSource;
