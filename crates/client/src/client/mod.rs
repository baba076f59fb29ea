//! Authenticated Splunk REST API client bound to one app namespace.
//!
//! # Submodules
//! - [`builder`]: Client construction from [`ConnectionParams`](sst_config::ConnectionParams)
//! - `session`: Session key retrieval and login (private module)
//! - `apps`, `indexes`, `macros`, `saved_searches`, `configs`, `inputs`,
//!   `credentials`, `receivers`: per-resource API methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Idempotent create-or-update decisions (see [`crate::provision`])
//!
//! # Invariants
//! - A client's namespace never changes; a new app context means a new client.
//! - Every API method handles a 401 by clearing the session, logging in again
//!   and retrying once, via the `retry_call!` macro.

pub mod builder;
mod session;

mod apps;
mod configs;
mod credentials;
mod indexes;
mod inputs;
mod macros;
mod receivers;
mod saved_searches;

use crate::auth::SessionManager;
use crate::endpoints::Namespace;

/// Wrap an async API call with automatic session renewal on 401.
///
/// ```ignore
/// retry_call!(self, __key, endpoints::some_endpoint(&self.http, &self.base_url, &__key, arg).await)
/// ```
///
/// The placeholder `__key` is bound to the current session key.
#[doc(hidden)]
#[macro_export]
macro_rules! retry_call {
    ($self:expr, $key:ident, $call:expr) => {{
        let $key = $self.session_key().await?;
        let result = $call;
        match result {
            Err($crate::error::ClientError::ApiError { status: 401, .. }) => {
                ::tracing::debug!("Session expired (status 401), clearing and re-authenticating...");
                $self.session_manager.clear_session();
                let $key = $self.session_key().await?;
                $call
            }
            other => other,
        }
    }};
}

/// Splunk REST API client for one `owner`/`app` namespace.
///
/// ```rust,ignore
/// let params = ConnectionParams::new("localhost", 8089, "admin", password);
/// let mut client = SplunkClient::builder().from_params(&params).build()?;
/// client.login().await?;
/// let indexes = client.list_indexes().await?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) namespace: Namespace,
    pub(crate) session_manager: SessionManager,
    pub(crate) max_retries: usize,
}

impl SplunkClient {
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Management URL, e.g. `https://localhost:8089`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn app(&self) -> &str {
        &self.namespace.app
    }
}
