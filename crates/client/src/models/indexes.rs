//! Index models.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Data type of an index. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    #[default]
    Event,
    Metric,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => write!(f, "event"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event" => Ok(Self::Event),
            "metric" => Ok(Self::Metric),
            other => Err(format!("unknown index type '{other}'")),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Index {
    #[serde(default)]
    pub name: String,
    /// Absent on very old servers, which only had event indexes.
    #[serde(default)]
    pub datatype: IndexKind,
    #[serde(
        rename = "totalEventCount",
        default,
        deserialize_with = "crate::serde_helpers::opt_u64_from_string_or_number"
    )]
    pub total_event_count: Option<u64>,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_string_or_bool")]
    pub disabled: bool,
}
