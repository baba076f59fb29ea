//! Configuration stanza model (`configs/conf-{file}/{stanza}`).
//!
//! Splunk mixes stanza keys with `eai:*` metadata in the same `content`
//! object, and may render numeric values as numbers or strings.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigStanza {
    #[serde(default)]
    pub name: String,
    #[serde(skip)]
    pub config_file: String,
    #[serde(flatten)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

impl ConfigStanza {
    /// Value of `key` rendered as it appears in the `.conf` file.
    pub fn value(&self, key: &str) -> Option<String> {
        match self.settings.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// True when `key` is already set to exactly `value`.
    pub fn has_value(&self, key: &str, value: &str) -> bool {
        self.value(key).as_deref() == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_renders_scalars() {
        let json = r#"{
            "interval": 3600,
            "index": "electricity_carbon_intensity",
            "disabled": false,
            "eai:acl": {"app": "TA-electricity-carbon-intensity"},
            "zone_s_": null
        }"#;
        let stanza: ConfigStanza = serde_json::from_str(json).unwrap();
        assert_eq!(stanza.value("interval").as_deref(), Some("3600"));
        assert_eq!(stanza.value("disabled").as_deref(), Some("0"));
        assert!(stanza.has_value("index", "electricity_carbon_intensity"));
        assert!(stanza.value("zone_s_").is_none());
        assert!(stanza.value("missing").is_none());
    }
}
