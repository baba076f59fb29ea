//! Simple receiver endpoint for posting raw events.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{send_request_with_retry, splunk_auth};
use crate::error::Result;

/// Metadata attached to every event posted to `receivers/simple`.
#[derive(Debug, Clone, Copy)]
pub struct RawEventMeta<'a> {
    pub source: &'a str,
    pub sourcetype: &'a str,
    pub index: &'a str,
}

/// Post one raw event body.
pub async fn post_raw_event(
    client: &Client,
    base_url: &str,
    session_key: &str,
    body: &str,
    meta: RawEventMeta<'_>,
    max_retries: usize,
) -> Result<()> {
    debug!(index = meta.index, bytes = body.len(), "Posting raw event");

    let url = format!("{}/services/receivers/simple", base_url);
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[
            ("source", meta.source),
            ("sourcetype", meta.sourcetype),
            ("index", meta.index),
            ("output_mode", "json"),
        ])
        .body(body.to_string());
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}
