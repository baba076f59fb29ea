//! Configuration file (`configs/conf-{file}`) endpoints.
//!
//! # What this module handles:
//! - Reading one stanza of a named configuration file
//! - Creating a stanza and setting its keys
//!
//! # What this module does NOT handle:
//! - Authentication retry logic (handled by [`crate::client`])
//! - Get-or-create decisions (see [`crate::provision`])

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{Namespace, encode_path_segment, send_request_with_retry, splunk_auth};
use crate::error::{ClientError, Result};
use crate::models::{ConfigStanza, SplunkResponse};
use crate::name_merge::attach_entry_name;

fn stanza_url(base_url: &str, ns: &Namespace, config_file: &str, stanza: &str) -> String {
    ns.url(
        base_url,
        &format!(
            "configs/conf-{}/{}",
            encode_path_segment(config_file),
            encode_path_segment(stanza)
        ),
    )
}

/// Get a specific configuration stanza. Returns `Ok(None)` on 404.
#[allow(clippy::too_many_arguments)]
pub async fn get_config_stanza(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    config_file: &str,
    stanza_name: &str,
    max_retries: usize,
) -> Result<Option<ConfigStanza>> {
    debug!("Getting stanza [{}] of {}.conf", stanza_name, config_file);

    let builder = client
        .get(stanza_url(base_url, ns, config_file, stanza_name))
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")]);

    let response = match send_request_with_retry(builder, max_retries).await {
        Ok(response) => response,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };

    let resp: SplunkResponse<ConfigStanza> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse config stanza response: {e}"))
    })?;

    Ok(resp.entry.into_iter().next().map(|e| {
        let mut stanza = attach_entry_name(e.name, e.content);
        stanza.config_file = config_file.to_string();
        stanza
    }))
}

/// Create an empty stanza in a configuration file.
pub async fn create_config_stanza(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    config_file: &str,
    stanza_name: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Creating stanza [{}] in {}.conf", stanza_name, config_file);

    let url = ns.url(
        base_url,
        &format!("configs/conf-{}", encode_path_segment(config_file)),
    );
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(&[("name", stanza_name)]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}

/// Set keys on an existing stanza.
#[allow(clippy::too_many_arguments)]
pub async fn set_config_values(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    config_file: &str,
    stanza_name: &str,
    values: &[(&str, &str)],
    max_retries: usize,
) -> Result<()> {
    debug!(
        keys = ?values.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        "Updating stanza [{}] of {}.conf",
        stanza_name,
        config_file
    );

    let builder = client
        .post(stanza_url(base_url, ns, config_file, stanza_name))
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(values);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}
