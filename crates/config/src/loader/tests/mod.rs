//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test builder methods and the merge order of every layer.
//! - Test port and database port overrides per profile.
//! - Test secret fallbacks and the resolved key set.
//! - Test `.env` loading for the tool itself.
//!
//! Invariants:
//! - Tests that touch process env or cwd use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod basic_tests;
pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
