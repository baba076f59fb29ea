//! Connection parameters for a Splunk management session.
//!
//! Responsibilities:
//! - Hold host, port, credentials and the app/owner namespace of one session.
//! - Produce a derived value for a different app context (`with_app`).
//! - Render the management and web URLs for the configured host.
//!
//! Does NOT handle:
//! - Prompting for values (see the CLI crate).
//! - Opening sessions (see the client crate).
//!
//! Invariants:
//! - A `ConnectionParams` value is never mutated after construction; switching app
//!   context always yields a new value.
//! - The host is stored without scheme or trailing slashes.

use crate::constants::{
    DEFAULT_APP, DEFAULT_MAX_RETRIES, DEFAULT_OWNER, DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS,
    SPLUNK_WEB_PORT,
};
use secrecy::SecretString;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// URL scheme of the management port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(format!("unknown scheme '{other}' (expected http or https)")),
        }
    }
}

/// Everything needed to open one authenticated session against one app context.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    /// App namespace that scoped objects (macros, saved searches, confs) resolve in.
    pub app: String,
    pub owner: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    pub timeout: Duration,
    pub max_retries: usize,
}

impl ConnectionParams {
    /// Create parameters for the default `search` app context with default transport settings.
    pub fn new(host: impl Into<String>, port: u16, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            scheme: Scheme::default(),
            host: normalize_host(&host.into()),
            port,
            username: username.into(),
            password,
            app: DEFAULT_APP.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            skip_verify: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Return a copy of these parameters scoped to another app.
    pub fn with_app(&self, app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            ..self.clone()
        }
    }

    /// Base URL of the management API, e.g. `https://localhost:8089`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// URL of a page in Splunk Web on the same host.
    ///
    /// The scheme of Splunk Web is independent of the management port, so it is
    /// rendered as `http(s)` for the operator to pick.
    pub fn web_url(&self, path: &str) -> String {
        format!(
            "http(s)://{}:{}/{}",
            self.host,
            SPLUNK_WEB_PORT,
            path.trim_start_matches('/')
        )
    }
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_HOST,
            DEFAULT_SPLUNK_PORT,
            crate::constants::DEFAULT_USERNAME,
            SecretString::new(String::new().into()),
        )
    }
}

/// Strip any scheme prefix and trailing slashes an operator may have typed.
///
/// # Examples
///
/// - `"https://splunk.example.com/"` -> `"splunk.example.com"`
/// - `"splunk.example.com"` -> `"splunk.example.com"`
pub(crate) fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn params() -> ConnectionParams {
        ConnectionParams::new(
            "splunk.example.com",
            8089,
            "admin",
            SecretString::new("s3cret-value".to_string().into()),
        )
    }

    #[test]
    fn test_new_uses_search_app_and_nobody_owner() {
        let p = params();
        assert_eq!(p.app, "search");
        assert_eq!(p.owner, "nobody");
        assert!(p.skip_verify);
        assert_eq!(p.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_with_app_returns_new_value() {
        let p = params();
        let scoped = p.with_app("Sustainability_Toolkit");
        assert_eq!(scoped.app, "Sustainability_Toolkit");
        assert_eq!(p.app, "search");
        assert_eq!(scoped.host, p.host);
        assert_eq!(scoped.password.expose_secret(), "s3cret-value");
    }

    #[test]
    fn test_base_url() {
        assert_eq!(params().base_url(), "https://splunk.example.com:8089");

        let mut p = params();
        p.scheme = Scheme::Http;
        assert_eq!(p.base_url(), "http://splunk.example.com:8089");
    }

    #[test]
    fn test_web_url() {
        assert_eq!(
            params().web_url("/en-US/app/search"),
            "http(s)://splunk.example.com:8000/en-US/app/search"
        );
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("https://splunk.example.com/"), "splunk.example.com");
        assert_eq!(normalize_host("http://10.0.0.5"), "10.0.0.5");
        assert_eq!(normalize_host("  localhost "), "localhost");
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("HTTP".parse::<Scheme>().unwrap(), Scheme::Http);
        assert_eq!("https".parse::<Scheme>().unwrap(), Scheme::Https);
        assert!("ftp".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_debug_does_not_expose_password() {
        let debug_output = format!("{:?}", params());
        assert!(!debug_output.contains("s3cret-value"));
        assert!(debug_output.contains("admin"));
    }
}
