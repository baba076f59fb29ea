//! Client-level session management helpers.
//!
//! # Invariants
//! - [`SplunkClient::session_key`] requires `&mut self` because it may trigger a login call
//! - Session keys are never logged

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use secrecy::ExposeSecret;

impl SplunkClient {
    /// Current session key, logging in first if none is held.
    pub(crate) async fn session_key(&mut self) -> Result<String> {
        if !self.session_manager.has_session() {
            self.login().await?;
        }

        self.session_manager
            .session_key()
            .map(|s| s.to_string())
            .ok_or_else(|| ClientError::SessionExpired {
                username: self.session_manager.username().to_string(),
            })
    }

    /// Login with username/password and store the session key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the credentials are rejected.
    pub async fn login(&mut self) -> Result<()> {
        let key = endpoints::login(
            &self.http,
            &self.base_url,
            self.session_manager.username(),
            self.session_manager.password().expose_secret(),
            self.max_retries,
        )
        .await?;

        self.session_manager.set_session_key(key);
        Ok(())
    }

    pub fn username(&self) -> &str {
        self.session_manager.username()
    }
}
