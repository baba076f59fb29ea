//! Credential store methods for [`SplunkClient`].

use secrecy::SecretString;

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::StoredCredential;

impl SplunkClient {
    pub async fn get_credential(
        &mut self,
        realm: &str,
        username: &str,
    ) -> Result<Option<StoredCredential>> {
        crate::retry_call!(
            self,
            __key,
            endpoints::get_credential(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                realm,
                username,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn create_credential(
        &mut self,
        realm: &str,
        username: &str,
        password: &SecretString,
    ) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::create_credential(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                realm,
                username,
                password,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn update_credential(
        &mut self,
        realm: &str,
        username: &str,
        password: &SecretString,
    ) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::update_credential(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                realm,
                username,
                password,
                self.max_retries,
            )
            .await
        )
    }
}
