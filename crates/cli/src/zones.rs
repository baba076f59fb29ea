//! Electricity Maps zone lookup and zone list normalization.

use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Fetch the public zone listing.
pub async fn fetch_zones(url: &str, timeout: Duration) -> Result<Value> {
    debug!(url, "Fetching Electricity Maps zones");

    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client for the zones lookup")?;
    let zones = http
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?
        .error_for_status()
        .with_context(|| format!("Zones lookup at {url} failed"))?
        .json::<Value>()
        .await
        .context("Zones lookup did not return JSON")?;
    Ok(zones)
}

/// One `CODE  Name` line per zone when the listing has the expected shape,
/// pretty-printed JSON otherwise.
pub fn render_zones(zones: &Value) -> String {
    let Some(map) = zones.as_object() else {
        return serde_json::to_string_pretty(zones).unwrap_or_else(|_| zones.to_string());
    };

    let width = map.keys().map(String::len).max().unwrap_or(0);
    map.iter()
        .map(|(code, info)| {
            let name = info.get("zoneName").and_then(Value::as_str).unwrap_or("");
            match info.get("countryName").and_then(Value::as_str) {
                Some(country) if country != name => {
                    format!("{code:<width$}  {name} ({country})")
                }
                _ => format!("{code:<width$}  {name}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split on commas, trim, and drop empty entries. `None` when nothing is left.
pub fn normalize_zones(input: &str) -> Option<String> {
    let zones: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .collect();
    (!zones.is_empty()).then(|| zones.join(","))
}
