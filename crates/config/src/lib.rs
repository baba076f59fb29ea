//! Configuration for the Sustainability Toolkit OTel quickstart.
//!
//! This crate provides the immutable connection parameters used to open
//! Splunk sessions, the loader that collects defaults from `.env`, the
//! environment and command-line overrides, and the on-disk layout of the
//! SPL and sample-data assets.

pub mod assets;
pub mod constants;
mod loader;
pub mod types;

pub use assets::AssetLayout;
pub use loader::{ConfigError, ConfigLoader, Settings, env_var_or_none};
pub use types::{ConnectionParams, Scheme};
