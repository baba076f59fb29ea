//! Installed app model (`/services/apps/local`).

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default)]
    pub name: String,
    pub label: Option<String>,
    pub version: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::bool_from_string_or_bool")]
    pub disabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SplunkResponse;
    use crate::name_merge::attach_entry_name;

    #[test]
    fn test_deserialize_app_list() {
        let json = r#"{
            "entry": [
                {"name": "Sustainability_Toolkit", "content": {"label": "Sustainability Toolkit", "version": "1.2.0", "disabled": false}},
                {"name": "search", "content": {"label": "Search & Reporting", "disabled": "0"}}
            ]
        }"#;
        let resp: SplunkResponse<App> = serde_json::from_str(json).unwrap();
        let apps: Vec<App> = resp
            .entry
            .into_iter()
            .map(|e| attach_entry_name(e.name, e.content))
            .collect();
        assert_eq!(apps[0].name, "Sustainability_Toolkit");
        assert_eq!(apps[0].version.as_deref(), Some("1.2.0"));
        assert!(!apps[1].disabled);
        assert!(apps[1].version.is_none());
    }
}
