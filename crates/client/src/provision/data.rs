//! Credentials, monitor inputs and raw event ingestion.

use secrecy::SecretString;
use tracing::info;

use super::{ProvisionError, ResourceKind};
use crate::client::SplunkClient;
use crate::endpoints::RawEventMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Created,
    AlreadyExists,
}

/// Store `password` for `username` in `realm`, replacing any existing entry.
pub async fn change_credential(
    client: &mut SplunkClient,
    username: &str,
    realm: &str,
    password: &SecretString,
) -> Result<CredentialOutcome, ProvisionError> {
    let existing = client
        .get_credential(realm, username)
        .await
        .map_err(ProvisionError::remote(ResourceKind::Credential, username, "read"))?;

    if existing.is_some() {
        client
            .update_credential(realm, username, password)
            .await
            .map_err(ProvisionError::remote(ResourceKind::Credential, username, "update"))?;
        info!(realm, username, "Updated stored credential");
        Ok(CredentialOutcome::Updated)
    } else {
        client
            .create_credential(realm, username, password)
            .await
            .map_err(ProvisionError::remote(ResourceKind::Credential, username, "create"))?;
        info!(realm, username, "Created stored credential");
        Ok(CredentialOutcome::Created)
    }
}

/// Monitor `path` into `index`; an existing input for the path is left as is.
pub async fn create_monitor_input(
    client: &mut SplunkClient,
    path: &str,
    index: &str,
    sourcetype: &str,
) -> Result<InputOutcome, ProvisionError> {
    let existing = client
        .get_monitor_input(path)
        .await
        .map_err(ProvisionError::remote(ResourceKind::MonitorInput, path, "read"))?;
    if existing.is_some() {
        info!(path, "Monitor input already exists");
        return Ok(InputOutcome::AlreadyExists);
    }

    client
        .create_monitor_input(path, index, sourcetype)
        .await
        .map_err(ProvisionError::remote(ResourceKind::MonitorInput, path, "create"))?;
    info!(path, index, sourcetype, "Created monitor input");
    Ok(InputOutcome::Created)
}

/// Post one event. Not retried beyond transport-level backoff.
pub async fn post_raw_event(
    client: &mut SplunkClient,
    body: &str,
    meta: RawEventMeta<'_>,
) -> Result<(), ProvisionError> {
    client
        .post_raw_event(body, meta)
        .await
        .map_err(ProvisionError::remote(ResourceKind::Event, meta.index, "post"))
}
