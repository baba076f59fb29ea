//! Idempotent operations on remote Splunk resources.
//!
//! Every operation reads before it writes so that a partially applied run can
//! simply be repeated:
//!
//! - [`create_index`] is a no-op for an existing index and warns when the
//!   existing type differs from the requested one.
//! - [`create_macro`] converges a macro to a definition: it declares the
//!   stanza only when absent and skips the write when already equal.
//! - [`rename_macro`] and [`rename_saved_search`] copy to the new name and
//!   keep the original as a backup.
//! - [`edit_config`] gets or creates a stanza and writes only keys that differ.
//! - Deletes treat an absent target as done.
//!
//! Failures are logged with the resource name and returned as
//! [`ProvisionError`], so callers can tell "absent" from "transport failure".

mod apps;
mod configs;
mod data;
mod error;
mod indexes;
mod macros;
mod saved_searches;

pub use apps::check_app_installed;
pub use configs::{ConfigOutcome, edit_config};
pub use data::{CredentialOutcome, InputOutcome, change_credential, create_monitor_input, post_raw_event};
pub use error::{ProvisionError, ResourceKind};
pub use indexes::{IndexOutcome, create_index};
pub use macros::{MacroOutcome, create_macro, delete_macro, rename_macro};
pub use saved_searches::{
    SavedSearchOutcome, create_saved_search, delete_saved_search, rename_saved_search,
    schedule_saved_search, update_saved_search,
};

use sst_config::ConnectionParams;
use tracing::info;

use crate::client::SplunkClient;

/// Result of copying a resource under a new name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Copied,
    /// The new name was already taken; nothing was written.
    TargetExists,
}

/// Result of a best-effort delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Absent,
}

/// Open an authenticated session for `params`.
///
/// # Errors
///
/// Returns [`ProvisionError::Authentication`] on rejected credentials or an
/// unreachable host.
pub async fn connect(params: &ConnectionParams) -> Result<SplunkClient, ProvisionError> {
    let auth_error = |source| ProvisionError::Authentication {
        username: params.username.clone(),
        base_url: params.base_url(),
        source,
    };

    let mut client = SplunkClient::builder()
        .from_params(params)
        .build()
        .map_err(auth_error)?;
    client.login().await.map_err(|e| {
        tracing::error!(base_url = %params.base_url(), error = %e, "Login failed");
        auth_error(e)
    })?;

    info!(
        base_url = %params.base_url(),
        username = %params.username,
        app = %params.app,
        "Session established"
    );
    Ok(client)
}
