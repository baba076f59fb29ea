//! Raw event posting for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints::{self, RawEventMeta};
use crate::error::Result;

impl SplunkClient {
    /// Post one event body to `receivers/simple`.
    pub async fn post_raw_event(&mut self, body: &str, meta: RawEventMeta<'_>) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::post_raw_event(&self.http, &self.base_url, &__key, body, meta, self.max_retries)
                .await
        )
    }
}
