//! Search macro methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;

impl SplunkClient {
    pub async fn macro_exists(&mut self, name: &str) -> Result<bool> {
        crate::retry_call!(
            self,
            __key,
            endpoints::macro_exists(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                self.max_retries,
            )
            .await
        )
    }

    /// Declare an empty macro stanza.
    pub async fn declare_macro(&mut self, name: &str) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::declare_macro(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn set_macro_definition(&mut self, name: &str, definition: &str) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::set_macro_definition(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                definition,
                self.max_retries,
            )
            .await
        )
    }

    /// Definition text of a macro, or `None` if it does not exist.
    pub async fn get_macro_definition(&mut self, name: &str) -> Result<Option<String>> {
        crate::retry_call!(
            self,
            __key,
            endpoints::get_macro_definition(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn delete_macro(&mut self, name: &str) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::delete_macro(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                self.max_retries,
            )
            .await
        )
    }
}
