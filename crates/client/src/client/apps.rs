//! App listing for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::App;

impl SplunkClient {
    /// List every locally installed app.
    pub async fn list_apps(&mut self) -> Result<Vec<App>> {
        crate::retry_call!(
            self,
            __key,
            endpoints::list_apps(&self.http, &self.base_url, &__key, self.max_retries).await
        )
    }
}
