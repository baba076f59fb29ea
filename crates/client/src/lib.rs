//! Splunk REST API client and idempotent provisioning operations.
//!
//! [`SplunkClient`] wraps the management API for one `owner`/`app`
//! namespace with session-key authentication and automatic re-login.
//! [`provision`] builds read-before-write operations on top of it that can
//! be re-run safely after a partial failure.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod name_merge;
pub mod provision;
mod serde_helpers;

pub use auth::SessionManager;
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use endpoints::{Namespace, RawEventMeta};
pub use error::{ClientError, Result};
pub use models::{
    App, ConfigStanza, Index, IndexKind, MonitorInput, SavedSearch, SavedSearchUpdate,
    StoredCredential,
};
pub use provision::{ProvisionError, ResourceKind, connect};
