use tracing::{info, warn};

use super::{DeleteOutcome, ProvisionError, RenameOutcome, ResourceKind};
use crate::client::SplunkClient;
use crate::models::{SavedSearch, SavedSearchUpdate};

#[derive(Debug, Clone)]
pub enum SavedSearchOutcome {
    /// The update was applied; holds the re-read search.
    Updated(SavedSearch),
    /// Every requested field already had the requested value.
    Unchanged(SavedSearch),
}

impl SavedSearchOutcome {
    pub fn search(&self) -> &SavedSearch {
        match self {
            Self::Updated(s) | Self::Unchanged(s) => s,
        }
    }
}

async fn fetch(
    client: &mut SplunkClient,
    name: &str,
) -> Result<Option<SavedSearch>, ProvisionError> {
    client
        .get_saved_search(name)
        .await
        .map_err(ProvisionError::remote(ResourceKind::SavedSearch, name, "read"))
}

/// Create a saved search; an existing one with the same name is an error.
pub async fn create_saved_search(
    client: &mut SplunkClient,
    name: &str,
    query: &str,
) -> Result<(), ProvisionError> {
    if fetch(client, name).await?.is_some() {
        warn!(saved_search = name, "Saved search already exists");
        return Err(ProvisionError::AlreadyExists {
            kind: ResourceKind::SavedSearch,
            name: name.to_string(),
        });
    }

    client
        .create_saved_search(name, query)
        .await
        .map_err(ProvisionError::remote(ResourceKind::SavedSearch, name, "create"))?;
    info!(saved_search = name, "Created saved search");
    Ok(())
}

/// Apply a partial update to an existing saved search and re-read it.
///
/// # Errors
///
/// [`ProvisionError::NotFound`] without any mutating call when the search
/// does not exist.
pub async fn update_saved_search(
    client: &mut SplunkClient,
    name: &str,
    update: &SavedSearchUpdate,
) -> Result<SavedSearchOutcome, ProvisionError> {
    let current = fetch(client, name)
        .await?
        .ok_or_else(|| ProvisionError::not_found(ResourceKind::SavedSearch, name))?;

    if update.is_satisfied_by(&current) {
        info!(saved_search = name, "Saved search already up to date");
        return Ok(SavedSearchOutcome::Unchanged(current));
    }

    client
        .update_saved_search(name, update)
        .await
        .map_err(ProvisionError::remote(ResourceKind::SavedSearch, name, "update"))?;

    let refreshed = fetch(client, name)
        .await?
        .ok_or_else(|| ProvisionError::not_found(ResourceKind::SavedSearch, name))?;
    info!(saved_search = name, "Updated saved search");
    Ok(SavedSearchOutcome::Updated(refreshed))
}

/// Enable scheduling of an existing saved search on `cron`.
pub async fn schedule_saved_search(
    client: &mut SplunkClient,
    name: &str,
    cron: &str,
) -> Result<SavedSearchOutcome, ProvisionError> {
    update_saved_search(client, name, &SavedSearchUpdate::schedule(cron)).await
}

/// Copy saved search `old_name` to `new_name`. The original is kept.
pub async fn rename_saved_search(
    client: &mut SplunkClient,
    old_name: &str,
    new_name: &str,
) -> Result<RenameOutcome, ProvisionError> {
    let original = fetch(client, old_name)
        .await?
        .ok_or_else(|| ProvisionError::not_found(ResourceKind::SavedSearch, old_name))?;

    if fetch(client, new_name).await?.is_some() {
        warn!(
            from = old_name,
            to = new_name,
            "Backup saved search already exists, leaving it untouched"
        );
        return Ok(RenameOutcome::TargetExists);
    }

    client
        .create_saved_search(new_name, original.query_for_copy())
        .await
        .map_err(ProvisionError::remote(ResourceKind::SavedSearch, new_name, "create"))?;
    info!(from = old_name, to = new_name, "Copied saved search");
    Ok(RenameOutcome::Copied)
}

/// Delete a saved search; an absent search counts as deleted.
pub async fn delete_saved_search(
    client: &mut SplunkClient,
    name: &str,
) -> Result<DeleteOutcome, ProvisionError> {
    match client.delete_saved_search(name).await {
        Ok(()) => {
            info!(saved_search = name, "Deleted saved search");
            Ok(DeleteOutcome::Deleted)
        }
        Err(e) if e.is_not_found() => {
            info!(saved_search = name, "Saved search already absent");
            Ok(DeleteOutcome::Absent)
        }
        Err(e) => Err(ProvisionError::remote(ResourceKind::SavedSearch, name, "delete")(e)),
    }
}
