//! Monitor input methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::MonitorInput;

impl SplunkClient {
    pub async fn get_monitor_input(&mut self, path: &str) -> Result<Option<MonitorInput>> {
        crate::retry_call!(
            self,
            __key,
            endpoints::get_monitor_input(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                path,
                self.max_retries,
            )
            .await
        )
    }

    pub async fn create_monitor_input(
        &mut self,
        path: &str,
        index: &str,
        sourcetype: &str,
    ) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::create_monitor_input(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                path,
                index,
                sourcetype,
                self.max_retries,
            )
            .await
        )
    }
}
