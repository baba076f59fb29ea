//! Search macro endpoints.
//!
//! Responsibilities:
//! - Create and read macros through the `properties/macros` namespace, which
//!   exposes each stanza key as its own resource.
//! - Delete macros through `configs/conf-macros`.
//!
//! Does NOT handle:
//! - Auth retry (see client module).
//! - Create-or-update decisions (see `provision::macros`).
//!
//! Invariants:
//! - `properties/*` endpoints answer in plain text or Atom; no `output_mode`
//!   is sent and only the status and raw body are used.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{Namespace, encode_path_segment, send_request_with_retry, splunk_auth};
use crate::error::Result;

/// Check whether a macro stanza exists (404 means absent).
pub async fn macro_exists(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    max_retries: usize,
) -> Result<bool> {
    debug!("Checking macro {}", name);

    let url = ns.url(
        base_url,
        &format!("properties/macros/{}", encode_path_segment(name)),
    );
    let builder = client
        .get(&url)
        .header("Authorization", splunk_auth(session_key));

    match send_request_with_retry(builder, max_retries).await {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Declare an empty macro stanza.
pub async fn declare_macro(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Declaring macro stanza {}", name);

    let url = ns.url(base_url, "properties/macros");
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .form(&[("__stanza", name)]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}

/// Set the `definition` key of an existing macro stanza.
pub async fn set_macro_definition(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    definition: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Setting definition of macro {}", name);

    let url = ns.url(
        base_url,
        &format!("properties/macros/{}", encode_path_segment(name)),
    );
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .form(&[("definition", definition)]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}

/// Read the raw `definition` value of a macro.
///
/// Returns `Ok(None)` if the macro or its definition key does not exist.
pub async fn get_macro_definition(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    max_retries: usize,
) -> Result<Option<String>> {
    debug!("Reading definition of macro {}", name);

    let url = ns.url(
        base_url,
        &format!("properties/macros/{}/definition", encode_path_segment(name)),
    );
    let builder = client
        .get(&url)
        .header("Authorization", splunk_auth(session_key));

    match send_request_with_retry(builder, max_retries).await {
        Ok(response) => Ok(Some(response.text().await?)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Delete a macro stanza.
pub async fn delete_macro(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    name: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Deleting macro {}", name);

    let url = ns.url(
        base_url,
        &format!("configs/conf-macros/{}", encode_path_segment(name)),
    );
    let builder = client
        .delete(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}
