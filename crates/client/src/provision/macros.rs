use tracing::{info, warn};

use super::{DeleteOutcome, ProvisionError, RenameOutcome, ResourceKind};
use crate::client::SplunkClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroOutcome {
    Created,
    /// The macro existed with another (or an empty) definition.
    Updated,
    Unchanged,
}

/// Converge macro `name` to `definition`.
///
/// The stanza is declared only when absent, so a run that failed between
/// declaring and setting the definition is repaired by running it again.
pub async fn create_macro(
    client: &mut SplunkClient,
    name: &str,
    definition: &str,
) -> Result<MacroOutcome, ProvisionError> {
    let exists = client
        .macro_exists(name)
        .await
        .map_err(ProvisionError::remote(ResourceKind::Macro, name, "look up"))?;

    let outcome = if exists {
        let current = client
            .get_macro_definition(name)
            .await
            .map_err(ProvisionError::remote(ResourceKind::Macro, name, "read"))?
            .unwrap_or_default();
        if current.trim() == definition.trim() {
            info!(macro_name = name, "Macro already up to date");
            return Ok(MacroOutcome::Unchanged);
        }
        if current.trim().is_empty() {
            warn!(macro_name = name, "Macro has no definition, setting it");
        }
        MacroOutcome::Updated
    } else {
        client
            .declare_macro(name)
            .await
            .map_err(ProvisionError::remote(ResourceKind::Macro, name, "create"))?;
        MacroOutcome::Created
    };

    client
        .set_macro_definition(name, definition)
        .await
        .map_err(ProvisionError::remote(ResourceKind::Macro, name, "set definition of"))?;
    info!(macro_name = name, ?outcome, "Macro definition applied");
    Ok(outcome)
}

/// Copy macro `old_name` to `new_name`. The original is kept as a backup.
///
/// An existing `new_name` with a non-empty definition is left untouched; one
/// left empty by an interrupted copy is filled in.
///
/// # Errors
///
/// [`ProvisionError::NotFound`] when `old_name` does not exist.
pub async fn rename_macro(
    client: &mut SplunkClient,
    old_name: &str,
    new_name: &str,
) -> Result<RenameOutcome, ProvisionError> {
    let definition = client
        .get_macro_definition(old_name)
        .await
        .map_err(ProvisionError::remote(ResourceKind::Macro, old_name, "read"))?
        .ok_or_else(|| ProvisionError::not_found(ResourceKind::Macro, old_name))?;

    let target_exists = client
        .macro_exists(new_name)
        .await
        .map_err(ProvisionError::remote(ResourceKind::Macro, new_name, "look up"))?;
    if target_exists {
        let backup = client
            .get_macro_definition(new_name)
            .await
            .map_err(ProvisionError::remote(ResourceKind::Macro, new_name, "read"))?
            .unwrap_or_default();
        if !backup.trim().is_empty() {
            warn!(
                from = old_name,
                to = new_name,
                "Backup macro already exists, leaving it untouched"
            );
            return Ok(RenameOutcome::TargetExists);
        }
        warn!(
            from = old_name,
            to = new_name,
            "Backup macro has no definition, copying it again"
        );
    }

    create_macro(client, new_name, &definition).await?;
    info!(from = old_name, to = new_name, "Copied macro");
    Ok(RenameOutcome::Copied)
}

/// Delete macro `name`; an absent macro counts as deleted.
pub async fn delete_macro(
    client: &mut SplunkClient,
    name: &str,
) -> Result<DeleteOutcome, ProvisionError> {
    match client.delete_macro(name).await {
        Ok(()) => {
            info!(macro_name = name, "Deleted macro");
            Ok(DeleteOutcome::Deleted)
        }
        Err(e) if e.is_not_found() => {
            info!(macro_name = name, "Macro already absent");
            Ok(DeleteOutcome::Absent)
        }
        Err(e) => Err(ProvisionError::remote(ResourceKind::Macro, name, "delete")(e)),
    }
}
