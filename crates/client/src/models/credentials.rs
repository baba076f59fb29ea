//! Stored credential model (`storage/passwords`).
//!
//! `clear_password` is deliberately not deserialized.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct StoredCredential {
    /// Entity name in the `realm:username:` form.
    #[serde(default)]
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub realm: Option<String>,
}
