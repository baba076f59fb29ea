//! Entry-name merging helpers for Splunk responses.
//!
//! Splunk returns the resource name at `entry[].name`, not inside
//! `entry[].content`; this copies it into the deserialized content model.

use crate::models::{App, ConfigStanza, Index, MonitorInput, SavedSearch, StoredCredential};

pub(crate) trait HasName {
    fn set_name(&mut self, name: String);
}

pub(crate) fn attach_entry_name<T: HasName>(entry_name: String, mut content: T) -> T {
    content.set_name(entry_name);
    content
}

macro_rules! impl_has_name {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasName for $ty {
                fn set_name(&mut self, name: String) {
                    self.name = name;
                }
            }
        )*
    };
}

impl_has_name!(App, ConfigStanza, Index, MonitorInput, SavedSearch, StoredCredential);
