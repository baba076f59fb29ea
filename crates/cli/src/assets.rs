//! SPL text loaded from the toolkit checkout.

use anyhow::{Context, Result};
use sst_config::AssetLayout;
use std::collections::BTreeMap;

/// SPL bodies keyed by asset name, all read before any remote call.
#[derive(Debug, Default)]
pub struct SplAssets {
    texts: BTreeMap<String, String>,
}

impl SplAssets {
    /// Read `<root>/splunk/spl/<name>.txt` for every name.
    ///
    /// # Errors
    ///
    /// Fails on the first file that is missing or unreadable.
    pub async fn load<'a>(
        layout: &AssetLayout,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let mut texts = BTreeMap::new();
        for name in names {
            let path = layout.spl_path(name);
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read SPL file {}", path.display()))?;
            tracing::debug!(name, bytes = text.len(), "Loaded SPL");
            texts.insert(name.to_string(), text);
        }
        Ok(Self { texts })
    }

    pub fn get(&self, name: &str) -> Result<&str> {
        self.texts
            .get(name)
            .map(String::as_str)
            .with_context(|| format!("SPL '{name}' was not loaded"))
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout_with(files: &[(&str, &str)]) -> (TempDir, AssetLayout) {
        let dir = TempDir::new().unwrap();
        let spl = dir.path().join("splunk").join("spl");
        std::fs::create_dir_all(&spl).unwrap();
        for (name, body) in files {
            std::fs::write(spl.join(format!("{name}.txt")), body).unwrap();
        }
        let layout = AssetLayout::new(dir.path());
        (dir, layout)
    }

    #[tokio::test]
    async fn test_loads_names_with_spaces_and_ampersands() {
        let (_dir, layout) = layout_with(&[
            ("power-otel", "index=otel"),
            ("Summarize Asset CO2e & kW V1.0", "| tstats count"),
        ]);
        let assets = SplAssets::load(&layout, ["power-otel", "Summarize Asset CO2e & kW V1.0"])
            .await
            .unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets.get("power-otel").unwrap(), "index=otel");
        assert_eq!(
            assets.get("Summarize Asset CO2e & kW V1.0").unwrap(),
            "| tstats count"
        );
        assert!(assets.get("missing").is_err());
    }

    #[tokio::test]
    async fn test_missing_file_names_the_path() {
        let (_dir, layout) = layout_with(&[("power-otel", "index=otel")]);
        let err = SplAssets::load(&layout, ["power-otel", "power-asset-location"])
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("power-asset-location.txt"));
    }
}
