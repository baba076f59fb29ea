//! Saved search methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{SavedSearch, SavedSearchUpdate};

impl SplunkClient {
    /// Fetch a saved search, or `None` if it does not exist.
    ///
    /// Also serves as the re-read after an update.
    pub async fn get_saved_search(&mut self, name: &str) -> Result<Option<SavedSearch>> {
        crate::retry_call!(
            self,
            __key,
            endpoints::get_saved_search(
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

    pub async fn create_saved_search(&mut self, name: &str, search: &str) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::create_saved_search(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                search,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn update_saved_search(
        &mut self,
        name: &str,
        update: &SavedSearchUpdate,
    ) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::update_saved_search(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                update,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn delete_saved_search(&mut self, name: &str) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::delete_saved_search(
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
