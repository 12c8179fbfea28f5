//! CLI command implementations.

pub mod populate_secrets;
pub mod resolve;
pub mod secrets;
