//! Error taxonomy of the provisioning operations.

use std::fmt;
use thiserror::Error;

use crate::error::ClientError;

/// Kind of remote resource an operation acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    App,
    Index,
    Macro,
    SavedSearch,
    ConfigStanza,
    Credential,
    MonitorInput,
    Event,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::App => "app",
            Self::Index => "index",
            Self::Macro => "macro",
            Self::SavedSearch => "saved search",
            Self::ConfigStanza => "config stanza",
            Self::Credential => "credential",
            Self::MonitorInput => "monitor input",
            Self::Event => "event",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Bad credentials or an unreachable management port.
    #[error("Could not authenticate as '{username}' at {base_url}: {source}")]
    Authentication {
        username: String,
        base_url: String,
        #[source]
        source: ClientError,
    },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: ResourceKind, name: String },

    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: ResourceKind, name: String },

    #[error("Failed to {action} {kind} '{name}': {source}")]
    RemoteApi {
        kind: ResourceKind,
        name: String,
        action: &'static str,
        #[source]
        source: ClientError,
    },

    /// A required app is not installed; the run cannot continue.
    #[error("Required app '{app}' is not installed")]
    MissingDependencyApp { app: String },
}

impl ProvisionError {
    /// Log a failed remote call against a named resource and wrap it.
    pub(crate) fn remote(
        kind: ResourceKind,
        name: &str,
        action: &'static str,
    ) -> impl FnOnce(ClientError) -> Self {
        move |source| {
            tracing::error!(%kind, name, action, error = %source, "Remote call failed");
            Self::RemoteApi {
                kind,
                name: name.to_string(),
                action,
                source,
            }
        }
    }

    pub(crate) fn not_found(kind: ResourceKind, name: &str) -> Self {
        tracing::error!(%kind, name, "Resource not found");
        Self::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    /// Underlying client error, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Authentication { source, .. } | Self::RemoteApi { source, .. } => Some(source),
            _ => None,
        }
    }
}
