//! App listing endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{send_request_with_retry, splunk_auth};
use crate::error::{ClientError, Result};
use crate::models::{App, SplunkResponse};
use crate::name_merge::attach_entry_name;

/// List every locally installed app.
pub async fn list_apps(
    client: &Client,
    base_url: &str,
    session_key: &str,
    max_retries: usize,
) -> Result<Vec<App>> {
    debug!("Listing installed apps");

    let url = format!("{}/services/apps/local", base_url);
    let builder = client
        .get(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json"), ("count", "-1")]);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: SplunkResponse<App> = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse apps response: {e}")))?;

    Ok(resp
        .entry
        .into_iter()
        .map(|e| attach_entry_name(e.name, e.content))
        .collect())
}
