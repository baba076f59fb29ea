//! Monitor input model (`data/inputs/monitor`).

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorInput {
    /// The monitored path.
    #[serde(default)]
    pub name: String,
    pub index: Option<String>,
    pub sourcetype: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_string_or_bool")]
    pub disabled: bool,
}
