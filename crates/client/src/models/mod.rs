//! Data models for Splunk REST API responses and requests.

mod apps;
mod common;
mod configs;
mod credentials;
mod indexes;
mod inputs;
mod saved_searches;

pub use apps::App;
pub use common::{Entry, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use configs::ConfigStanza;
pub use credentials::StoredCredential;
pub use indexes::{Index, IndexKind};
pub use inputs::MonitorInput;
pub use saved_searches::{SavedSearch, SavedSearchUpdate};
