use tracing::{info, warn};

use super::{ProvisionError, ResourceKind};
use crate::client::SplunkClient;
use crate::models::IndexKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    Created,
    AlreadyExists,
    /// The index exists with a different type, which cannot be changed.
    KindMismatch {
        existing: IndexKind,
        requested: IndexKind,
    },
}

/// Create `name` with `kind` unless an index of that name already exists.
///
/// An existing index never triggers a mutating call.
pub async fn create_index(
    client: &mut SplunkClient,
    name: &str,
    kind: IndexKind,
) -> Result<IndexOutcome, ProvisionError> {
    let indexes = client
        .list_indexes()
        .await
        .map_err(ProvisionError::remote(ResourceKind::Index, name, "list"))?;

    if let Some(existing) = indexes.iter().find(|index| index.name == name) {
        if existing.datatype != kind {
            warn!(
                index = name,
                existing = %existing.datatype,
                requested = %kind,
                "Index exists with a different type; index types cannot be changed"
            );
            return Ok(IndexOutcome::KindMismatch {
                existing: existing.datatype,
                requested: kind,
            });
        }
        info!(index = name, "Index already exists");
        return Ok(IndexOutcome::AlreadyExists);
    }

    client
        .create_index(name, kind)
        .await
        .map_err(ProvisionError::remote(ResourceKind::Index, name, "create"))?;
    info!(index = name, %kind, "Created index");
    Ok(IndexOutcome::Created)
}
