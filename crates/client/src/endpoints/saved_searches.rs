//! Saved search endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{
    Namespace, encode_path_segment, form_params, send_request_with_retry, splunk_auth,
};
use crate::error::{ClientError, Result};
use crate::models::{SavedSearch, SavedSearchUpdate, SplunkResponse};
use crate::name_merge::attach_entry_name;

fn saved_search_url(base_url: &str, ns: &Namespace, name: &str) -> String {
    ns.url(
        base_url,
        &format!("saved/searches/{}", encode_path_segment(name)),
    )
}

/// Fetch one saved search by name.
///
/// Returns `Ok(None)` on 404.
pub async fn get_saved_search(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    max_retries: usize,
) -> Result<Option<SavedSearch>> {
    debug!("Getting saved search {}", name);

    let builder = client
        .get(saved_search_url(base_url, ns, name))
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")]);

    let response = match send_request_with_retry(builder, max_retries).await {
        Ok(response) => response,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };

    let resp: SplunkResponse<SavedSearch> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse saved search response: {e}"))
    })?;

    Ok(resp
        .entry
        .into_iter()
        .next()
        .map(|e| attach_entry_name(e.name, e.content)))
}

/// Create a saved search with the given query.
pub async fn create_saved_search(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    search: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Creating saved search {}", name);

    let url = ns.url(base_url, "saved/searches");
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(&[("name", name), ("search", search)]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}

/// Apply a partial update; unset fields keep their current values.
pub async fn update_saved_search(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    update: &SavedSearchUpdate,
    max_retries: usize,
) -> Result<()> {
    debug!("Updating saved search {}", name);

    let mut form: Vec<(&str, String)> = vec![];
    form_params! { form =>
        "search" => update.search.as_deref(),
        "description" => update.description.as_deref(),
        "cron_schedule" => update.cron_schedule.as_deref(),
        "is_scheduled" => bool update.is_scheduled,
        "disabled" => bool update.disabled,
    }

    let builder = client
        .post(saved_search_url(base_url, ns, name))
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(&form);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}

/// Delete a saved search.
pub async fn delete_saved_search(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Deleting saved search {}", name);

    let builder = client
        .delete(saved_search_url(base_url, ns, name))
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}
