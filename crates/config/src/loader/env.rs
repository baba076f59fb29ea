//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `SPLUNK_*` and `SST_*` environment variables.
//! - Apply their values to a `ConfigLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::Scheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_var<T: FromStr>(var: &str, value: &str, message: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("SPLUNK_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(port) = env_var_or_none("SPLUNK_PORT") {
        loader.set_port(Some(parse_var(
            "SPLUNK_PORT",
            &port,
            "must be a port number between 1 and 65535",
        )?));
    }
    if let Some(username) = env_var_or_none("SPLUNK_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("SPLUNK_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(scheme) = env_var_or_none("SPLUNK_SCHEME") {
        loader.set_scheme(Some(parse_var::<Scheme>(
            "SPLUNK_SCHEME",
            &scheme,
            "must be http or https",
        )?));
    }
    if let Some(skip) = env_var_or_none("SPLUNK_SKIP_VERIFY") {
        loader.set_skip_verify(Some(parse_var(
            "SPLUNK_SKIP_VERIFY",
            &skip,
            "must be true or false",
        )?));
    }
    if let Some(timeout) = env_var_or_none("SPLUNK_TIMEOUT") {
        let secs: u64 = parse_var("SPLUNK_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("SPLUNK_MAX_RETRIES") {
        loader.set_max_retries(Some(parse_var(
            "SPLUNK_MAX_RETRIES",
            &retries,
            "must be a non-negative integer",
        )?));
    }
    if let Some(dir) = env_var_or_none("SST_ASSETS_DIR") {
        loader.set_assets_dir(Some(PathBuf::from(dir)));
    }
    if let Some(url) = env_var_or_none("SST_ZONES_URL") {
        loader.set_zones_url(Some(url));
    }
    Ok(())
}
