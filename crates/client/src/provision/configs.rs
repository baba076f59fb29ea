use tracing::info;

use super::{ProvisionError, ResourceKind};
use crate::client::SplunkClient;
use crate::models::ConfigStanza;

#[derive(Debug, Clone)]
pub struct ConfigOutcome {
    pub stanza_created: bool,
    /// Keys written by this call.
    pub changed: Vec<String>,
    /// Keys that already had the requested value.
    pub unchanged: Vec<String>,
    /// The stanza as re-read after the writes.
    pub stanza: ConfigStanza,
}

impl ConfigOutcome {
    pub fn is_noop(&self) -> bool {
        !self.stanza_created && self.changed.is_empty()
    }
}

/// Get or create `[stanza]` in `config_file`, then set each key that differs.
///
/// Keys are written one request at a time; a failure part way leaves the
/// earlier keys applied and a rerun skips them.
pub async fn edit_config(
    client: &mut SplunkClient,
    config_file: &str,
    stanza: &str,
    settings: &[(&str, &str)],
) -> Result<ConfigOutcome, ProvisionError> {
    let current = client
        .get_config_stanza(config_file, stanza)
        .await
        .map_err(ProvisionError::remote(ResourceKind::ConfigStanza, stanza, "read"))?;

    let stanza_created = current.is_none();
    if stanza_created {
        client
            .create_config_stanza(config_file, stanza)
            .await
            .map_err(ProvisionError::remote(ResourceKind::ConfigStanza, stanza, "create"))?;
        info!(config_file, stanza, "Created config stanza");
    }

    let mut changed = Vec::new();
    let mut unchanged = Vec::new();
    for &(key, value) in settings {
        if current.as_ref().is_some_and(|c| c.has_value(key, value)) {
            unchanged.push(key.to_string());
            continue;
        }
        client
            .set_config_values(config_file, stanza, &[(key, value)])
            .await
            .map_err(ProvisionError::remote(ResourceKind::ConfigStanza, stanza, "update"))?;
        changed.push(key.to_string());
    }

    let stanza_now = client
        .get_config_stanza(config_file, stanza)
        .await
        .map_err(ProvisionError::remote(ResourceKind::ConfigStanza, stanza, "read"))?
        .ok_or_else(|| ProvisionError::not_found(ResourceKind::ConfigStanza, stanza))?;

    info!(
        config_file,
        stanza,
        changed = changed.len(),
        unchanged = unchanged.len(),
        "Config stanza applied"
    );
    Ok(ConfigOutcome {
        stanza_created,
        changed,
        unchanged,
        stanza: stanza_now,
    })
}
