//! Saved search models.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SavedSearch {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub search: String,
    /// The query with macros and lookups resolved to their qualified form.
    #[serde(rename = "qualifiedSearch")]
    pub qualified_search: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_string_or_bool")]
    pub is_scheduled: bool,
    pub cron_schedule: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_string_or_bool")]
    pub disabled: bool,
}

impl SavedSearch {
    /// Query text to copy when cloning the search under a new name.
    pub fn query_for_copy(&self) -> &str {
        self.qualified_search
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .unwrap_or(&self.search)
    }
}

/// Fields of a saved search that may be changed after creation.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedSearchUpdate {
    pub search: Option<String>,
    pub description: Option<String>,
    pub cron_schedule: Option<String>,
    pub is_scheduled: Option<bool>,
    pub disabled: Option<bool>,
}

impl SavedSearchUpdate {
    /// Enable scheduling on `cron`.
    pub fn schedule(cron: impl Into<String>) -> Self {
        Self {
            cron_schedule: Some(cron.into()),
            is_scheduled: Some(true),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when `current` already holds every field this update sets.
    pub fn is_satisfied_by(&self, current: &SavedSearch) -> bool {
        self.search.as_ref().is_none_or(|s| *s == current.search)
            && self
                .description
                .as_ref()
                .is_none_or(|d| Some(d) == current.description.as_ref())
            && self
                .cron_schedule
                .as_ref()
                .is_none_or(|c| Some(c) == current.cron_schedule.as_ref())
            && self.is_scheduled.is_none_or(|s| s == current.is_scheduled)
            && self.disabled.is_none_or(|d| d == current.disabled)
    }
}
