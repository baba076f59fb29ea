//! REST API endpoint implementations.
//!
//! Each function performs one HTTP call and parses its response. Session
//! renewal lives in the client module; these functions only see a session key.

mod apps;
mod auth;
mod configs;
mod credentials;
mod form_params;
mod indexes;
mod inputs;
mod macros;
mod receivers;
mod request;
mod saved_searches;
mod url_encoding;

pub use apps::list_apps;
pub use auth::login;
pub use configs::{create_config_stanza, get_config_stanza, set_config_values};
pub use credentials::{create_credential, credential_id, get_credential, update_credential};
pub use indexes::{create_index, list_indexes};
pub use inputs::{create_monitor_input, get_monitor_input};
pub use macros::{declare_macro, delete_macro, get_macro_definition, macro_exists, set_macro_definition};
pub use receivers::{RawEventMeta, post_raw_event};
pub use request::send_request_with_retry;
pub use saved_searches::{
    create_saved_search, delete_saved_search, get_saved_search, update_saved_search,
};
pub use url_encoding::encode_path_segment;

pub(crate) use form_params::form_params;

/// Owner/app pair scoping `/servicesNS/{owner}/{app}/...` paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub owner: String,
    pub app: String,
}

impl Namespace {
    pub fn new(owner: impl Into<String>, app: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            app: app.into(),
        }
    }

    /// Absolute URL of `rel` (no leading slash) inside this namespace.
    pub fn url(&self, base_url: &str, rel: &str) -> String {
        format!(
            "{}/servicesNS/{}/{}/{}",
            base_url,
            encode_path_segment(&self.owner),
            encode_path_segment(&self.app),
            rel
        )
    }
}

/// Authorization header value for a session key.
pub(crate) fn splunk_auth(session_key: &str) -> String {
    format!("Splunk {session_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_url() {
        let ns = Namespace::new("nobody", "Sustainability_Toolkit");
        assert_eq!(
            ns.url("https://localhost:8089", "data/indexes"),
            "https://localhost:8089/servicesNS/nobody/Sustainability_Toolkit/data/indexes"
        );
    }
}
