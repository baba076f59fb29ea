//! Monitor (file) data input endpoints.
//!
//! # What this module does NOT handle:
//! - Authentication retry logic (handled by [`crate::client`])
//! - Existence checks before creation (see [`crate::provision`])

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{Namespace, encode_path_segment, send_request_with_retry, splunk_auth};
use crate::error::{ClientError, Result};
use crate::models::{MonitorInput, SplunkResponse};
use crate::name_merge::attach_entry_name;

/// Get the monitor input for a file path. Returns `Ok(None)` on 404.
pub async fn get_monitor_input(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    path: &str,
    max_retries: usize,
) -> Result<Option<MonitorInput>> {
    debug!("Getting monitor input {}", path);

    let url = ns.url(
        base_url,
        &format!("data/inputs/monitor/{}", encode_path_segment(path)),
    );
    let builder = client
        .get(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")]);

    let response = match send_request_with_retry(builder, max_retries).await {
        Ok(response) => response,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };

    let resp: SplunkResponse<MonitorInput> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse monitor input response: {e}"))
    })?;

    Ok(resp
        .entry
        .into_iter()
        .next()
        .map(|e| attach_entry_name(e.name, e.content)))
}

/// Create a monitor input for `path` routed to `index` with `sourcetype`.
#[allow(clippy::too_many_arguments)]
pub async fn create_monitor_input(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    path: &str,
    index: &str,
    sourcetype: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Creating monitor input {} -> {}", path, index);

    let url = ns.url(base_url, "data/inputs/monitor");
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(&[("name", path), ("index", index), ("sourcetype", sourcetype)]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}
