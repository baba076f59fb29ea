//! Credential store (`storage/passwords`) endpoints.
//!
//! Stored credentials are addressed as `realm:username:` with any `:` inside
//! the realm or username escaped as `\:`.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::endpoints::{Namespace, encode_path_segment, send_request_with_retry, splunk_auth};
use crate::error::{ClientError, Result};
use crate::models::{SplunkResponse, StoredCredential};
use crate::name_merge::attach_entry_name;

/// Entity name Splunk assigns to a stored credential.
pub fn credential_id(realm: &str, username: &str) -> String {
    fn escape(s: &str) -> String {
        s.replace(':', "\\:")
    }
    format!("{}:{}:", escape(realm), escape(username))
}

/// Look up a stored credential. Returns `Ok(None)` on 404.
pub async fn get_credential(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    realm: &str,
    username: &str,
    max_retries: usize,
) -> Result<Option<StoredCredential>> {
    debug!("Getting stored credential for {} in realm {}", username, realm);

    let url = ns.url(
        base_url,
        &format!(
            "storage/passwords/{}",
            encode_path_segment(&credential_id(realm, username))
        ),
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

    let resp: SplunkResponse<StoredCredential> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse credential response: {e}"))
    })?;

    Ok(resp
        .entry
        .into_iter()
        .next()
        .map(|e| attach_entry_name(e.name, e.content)))
}

/// Store a new credential.
#[allow(clippy::too_many_arguments)]
pub async fn create_credential(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    realm: &str,
    username: &str,
    password: &SecretString,
    max_retries: usize,
) -> Result<()> {
    debug!("Creating stored credential for {} in realm {}", username, realm);

    let url = ns.url(base_url, "storage/passwords");
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(&[
            ("name", username),
            ("realm", realm),
            ("password", password.expose_secret()),
        ]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}

/// Replace the password of an existing stored credential.
#[allow(clippy::too_many_arguments)]
pub async fn update_credential(
    client: &Client,
    base_url: &str,
    ns: &Namespace,
    session_key: &str,
    realm: &str,
    username: &str,
    password: &SecretString,
    max_retries: usize,
) -> Result<()> {
    debug!("Updating stored credential for {} in realm {}", username, realm);

    let url = ns.url(
        base_url,
        &format!(
            "storage/passwords/{}",
            encode_path_segment(&credential_id(realm, username))
        ),
    );
    let builder = client
        .post(&url)
        .header("Authorization", splunk_auth(session_key))
        .query(&[("output_mode", "json")])
        .form(&[("password", password.expose_secret())]);
    send_request_with_retry(builder, max_retries).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_id() {
        assert_eq!(credential_id("electricitymaps", "api"), "electricitymaps:api:");
        assert_eq!(credential_id("a:b", "c"), "a\\:b:c:");
    }
}
