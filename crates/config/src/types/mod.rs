//! Configuration type definitions for the quickstart.
//!
//! Responsibilities:
//! - Define the immutable connection parameters used to open a Splunk session.
//! - Define the URL scheme selection for the management port.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

pub(crate) mod connection;

pub use connection::{ConnectionParams, Scheme};
