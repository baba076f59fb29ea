//! Index methods for [`SplunkClient`].
//!
//! # What this module does NOT handle:
//! - Low-level index endpoint HTTP calls (in [`crate::endpoints`])
//! - Existence checks before creation (see [`crate::provision`])

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Index, IndexKind};

impl SplunkClient {
    /// List all indexes.
    pub async fn list_indexes(&mut self) -> Result<Vec<Index>> {
        crate::retry_call!(
            self,
            __key,
            endpoints::list_indexes(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                self.max_retries,
            )
            .await
        )
    }

    /// Create an index of the given kind.
    pub async fn create_index(&mut self, name: &str, kind: IndexKind) -> Result<()> {
        crate::retry_call!(
            self,
            __key,
            endpoints::create_index(
                &self.http,
                &self.base_url,
                &self.namespace,
                &__key,
                name,
                kind,
                self.max_retries,
            )
            .await
        )
    }
}
