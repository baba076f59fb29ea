//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use secrecy::SecretString;
use std::time::Duration;

use crate::auth::SessionManager;
use crate::client::SplunkClient;
use crate::endpoints::Namespace;
use crate::error::{ClientError, Result};
use sst_config::ConnectionParams;
use sst_config::constants::{
    DEFAULT_APP, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_OWNER, DEFAULT_TIMEOUT_SECS,
};

pub struct SplunkClientBuilder {
    base_url: Option<String>,
    credentials: Option<(String, SecretString)>,
    namespace: Namespace,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            namespace: Namespace::new(DEFAULT_OWNER, DEFAULT_APP),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl SplunkClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn credentials(mut self, username: String, password: SecretString) -> Self {
        self.credentials = Some((username, password));
        self
    }

    pub fn namespace(mut self, owner: &str, app: &str) -> Self {
        self.namespace = Namespace::new(owner, app);
        self
    }

    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Take every setting from one connection parameters value.
    pub fn from_params(mut self, params: &ConnectionParams) -> Self {
        self.base_url = Some(params.base_url());
        self.credentials = Some((params.username.clone(), params.password.clone()));
        self.namespace = Namespace::new(&params.owner, &params.app);
        self.skip_verify = params.skip_verify;
        self.timeout = params.timeout;
        self.max_retries = params.max_retries;
        self
    }

    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url} must start with http:// or https://"
            )));
        }

        let (username, password) = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SplunkClient {
            http,
            base_url,
            namespace: self.namespace,
            session_manager: SessionManager::new(username, password),
            max_retries: self.max_retries,
        })
    }
}
