//! Configuration file methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ConfigStanza;

impl SplunkClient {
    /// Fetch one stanza, or `None` if it does not exist.
    pub async fn get_config_stanza(
        &mut self,
        config_file: &str,
        stanza: &str,
    ) -> Result<Option<ConfigStanza>> {
        crate::retry_call!(
            self,
            __key,
            endpoints::get_config_stanza(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                config_file,
                stanza,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn create_config_stanza(&mut self, config_file: &str, stanza: &str) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::create_config_stanza(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                config_file,
                stanza,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn set_config_values(
        &mut self,
        config_file: &str,
        stanza: &str,
        values: &[(&str, &str)],
    ) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::set_config_values(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                config_file,
                stanza,
                values,
                self.max_retries,
            )
            .await
        )
    }
}
