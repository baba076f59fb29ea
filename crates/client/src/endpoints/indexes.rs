//! Index endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{Namespace, send_request_with_retry, splunk_auth};
use crate::error::{ClientError, Result};
use crate::models::{Index, IndexKind, SplunkResponse};
use crate::name_merge::attach_entry_name;

/// List all indexes visible in the namespace.
pub async fn list_indexes(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    max_retries: usize,
) -> Result<Vec<Index>> {
    debug!("Listing indexes");

    let url = ns.url(base_url, "data/indexes");
    let builder = client
        .get(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json"), ("count", "-1")]);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: SplunkResponse<Index> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse indexes response: {e}"))
    })?;

    Ok(resp
        .entry
        .into_iter()
        .map(|e| attach_entry_name(e.name, e.content))
        .collect())
}

/// Create an index. Metric indexes carry `datatype=metric`.
pub async fn create_index(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    kind: IndexKind,
    max_retries: usize,
) -> Result<()> {
    debug!("Creating {} index {}", kind, name);

    let mut form: Vec<(&str, String)> = vec![("name", name.to_string())];
    if kind == IndexKind::Metric {
        form.push(("datatype", kind.to_string()));
    }

    let url = ns.url(base_url, "data/indexes");
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(&form);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}
