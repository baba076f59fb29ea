//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` merging `.env`, environment and CLI values.
//! - Build the final `Settings` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Interactive prompting for values that are still missing.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::assets::AssetLayout;
use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, DEFAULT_ZONES_URL, MAX_MAX_RETRIES,
    MAX_TIMEOUT_SECS,
};
use crate::types::{ConnectionParams, Scheme};

/// Configuration loader that builds settings from the environment and CLI flags.
#[derive(Default)]
pub struct ConfigLoader {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<SecretString>,
    scheme: Option<Scheme>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    assets_dir: Option<PathBuf>,
    zones_url: Option<String>,
}

/// Fully resolved, validated settings for one quickstart run.
///
/// Host, port and username stay optional: they are defaults offered to the
/// operator, who confirms or replaces them at the prompt.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    /// Supplied through `SPLUNK_PASSWORD` only; skips the password prompt.
    pub password: Option<SecretString>,
    pub scheme: Scheme,
    pub skip_verify: bool,
    pub timeout: Duration,
    pub max_retries: usize,
    pub assets: AssetLayout,
    pub zones_url: String,
}

impl Settings {
    /// Combine the operator's answers with the transport settings.
    pub fn connection(
        &self,
        host: &str,
        port: u16,
        username: &str,
        password: SecretString,
    ) -> ConnectionParams {
        let mut params = ConnectionParams::new(host, port, username, password);
        params.scheme = self.scheme;
        params.skip_verify = self.skip_verify;
        params.timeout = self.timeout;
        params.max_retries = self.max_retries;
        params
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` or `ConfigError::DotenvIo` when the file
    /// exists but cannot be used. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the toolkit assets root (the directory holding `splunk/spl` and `data`).
    pub fn with_assets_dir(mut self, dir: PathBuf) -> Self {
        self.assets_dir = Some(dir);
        self
    }

    pub fn with_zones_url(mut self, url: String) -> Self {
        self.zones_url = Some(url);
        self
    }

    /// Build the final settings.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "max retries ({max_retries}) exceeds maximum allowed value of {MAX_MAX_RETRIES}"
                ),
            });
        }

        if self.port == Some(0) {
            return Err(ConfigError::InvalidValue {
                var: "port".to_string(),
                message: "must be a port number between 1 and 65535".to_string(),
            });
        }

        let zones_url = self
            .zones_url
            .unwrap_or_else(|| DEFAULT_ZONES_URL.to_string());
        validate_zones_url(&zones_url)?;

        let assets = match self.assets_dir {
            Some(root) => AssetLayout::new(root),
            None => AssetLayout::from_current_dir()?,
        };

        Ok(Settings {
            host: self.host,
            port: self.port,
            username: self.username,
            password: self.password,
            scheme: self.scheme.unwrap_or_default(),
            skip_verify: self.skip_verify.unwrap_or(true),
            timeout,
            max_retries,
            assets,
            zones_url,
        })
    }

    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_scheme(&mut self, scheme: Option<Scheme>) {
        self.scheme = scheme;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_assets_dir(&mut self, dir: Option<PathBuf>) {
        self.assets_dir = dir;
    }

    pub(crate) fn set_zones_url(&mut self, url: Option<String>) {
        self.zones_url = url;
    }
}

fn validate_zones_url(raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidZonesUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidZonesUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}
