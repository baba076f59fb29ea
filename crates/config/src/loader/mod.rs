//! Configuration loader for `.env` files, environment variables and CLI overrides.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//! - Validate numeric bounds before any connection is attempted.
//!
//! Does NOT handle:
//! - Prompting the operator (see the CLI crate).
//! - Opening sessions (see the client crate).
//!
//! Invariants / Assumptions:
//! - CLI overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::{ConfigLoader, Settings};
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
