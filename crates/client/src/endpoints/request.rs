//! Request execution with retry for transient failures.
//!
//! Responsibilities:
//! - Send one HTTP request, retrying 429/502/503/504 with exponential backoff.
//! - Convert non-success responses into `ClientError::ApiError`, preferring the
//!   Splunk `messages` array over the raw body.
//!
//! Does NOT handle:
//! - Session renewal on 401 (see the `retry_call!` macro in the client module).
//!
//! Invariants:
//! - Backoff is `2^attempt` seconds: 1s, 2s, 4s, ...
//! - `max_retries == 0` sends the request exactly once.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Sends an HTTP request, retrying transient statuses up to `max_retries` times.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when a transient status persists
/// past the last attempt, `ClientError::ApiError` for any other non-success
/// status, and `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 0 => {
                debug!("Request builder cannot be cloned, single attempt only");
                let response = builder.send().await?;
                return check_status(response).await;
            }
            None => return Err(ClientError::MaxRetriesExceeded(attempt)),
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if !ClientError::is_retryable_status(status) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request completed after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                status,
                attempt = attempt + 1,
                max_attempts = max_retries + 1,
                backoff_secs,
                "Transient error, retrying with exponential backoff"
            );
            tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
        }
    }

    debug!(
        attempts = max_retries + 1,
        "Max retries exhausted for transient error"
    );
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message: error_message(body),
        request_id,
    })
}

/// Render a Splunk `{"messages": [...]}` body as `TYPE: text; ...`, or return it unchanged.
fn error_message(body: String) -> String {
    match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m
            .messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; "),
        _ => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_joins_splunk_messages() {
        let body = r#"{"messages":[{"type":"ERROR","text":"Object id=otel already exists."},{"type":"WARN","text":"second"}]}"#;
        assert_eq!(
            error_message(body.to_string()),
            "ERROR: Object id=otel already exists.; WARN: second"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("<html>oops</html>".to_string()), "<html>oops</html>");
        assert_eq!(error_message(r#"{"messages":[]}"#.to_string()), r#"{"messages":[]}"#);
    }
}
