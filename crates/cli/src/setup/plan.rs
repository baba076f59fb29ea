//! The fixed configuration applied by the quickstart.

use sst_client::IndexKind;

pub const SUSTAINABILITY_APP: &str = "Sustainability_Toolkit";
pub const CARBON_INTENSITY_APP: &str = "TA-electricity-carbon-intensity";

/// Apps that must already be installed; the run stops otherwise.
pub const DEPENDENCY_APPS: [&str; 2] = [SUSTAINABILITY_APP, CARBON_INTENSITY_APP];

pub const INDEXES: [(&str, IndexKind); 4] = [
    ("otel", IndexKind::Event),
    ("electricity_carbon_intensity", IndexKind::Event),
    ("sustainability_toolkit_summary_asset_metrics", IndexKind::Metric),
    ("sustainability_toolkit_summary_electricity_metrics", IndexKind::Metric),
];

/// Suffix of the backup copy kept when a macro is replaced.
pub const BACKUP_SUFFIX: &str = "-old";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroStep {
    /// Create or converge the macro.
    Create(&'static str),
    /// Back the existing macro up under `<name>-old`, then converge it.
    Replace(&'static str),
}

impl MacroStep {
    pub fn name(self) -> &'static str {
        match self {
            Self::Create(name) | Self::Replace(name) => name,
        }
    }
}

/// Macros switched to the OTel data; each definition is `<name>.txt`.
pub const MACROS: [MacroStep; 4] = [
    MacroStep::Create("power-otel"),
    MacroStep::Replace("power-asset-location"),
    MacroStep::Replace("electricity-carbon-intensity"),
    MacroStep::Replace("electricity-carbon-intensity-for-assets"),
];

#[derive(Debug, Clone, Copy)]
pub struct SavedSearchStep {
    pub name: &'static str,
    /// SPL asset name; `/` cannot appear in a file name.
    pub spl: &'static str,
    pub cron: &'static str,
    pub description: Option<&'static str>,
}

pub const SAVED_SEARCHES: [SavedSearchStep; 2] = [
    SavedSearchStep {
        name: "Summarize Asset CO2e & kW V1.0",
        spl: "Summarize Asset CO2e & kW V1.0",
        cron: "23 * * * *",
        description: Some("Modified to support OTel"),
    },
    SavedSearchStep {
        name: "Summarize Electricity CO2e/kWh V1.0",
        spl: "Summarize Electricity CO2e_kWh V1.0",
        cron: "24 * * * *",
        description: None,
    },
];

/// Every SPL asset the plan reads.
pub fn spl_assets() -> impl Iterator<Item = &'static str> {
    MACROS
        .into_iter()
        .map(MacroStep::name)
        .chain(SAVED_SEARCHES.into_iter().map(|step| step.spl))
}

/// Electricity Maps modular input collecting the latest intensity hourly.
pub mod carbon_input {
    pub const CONF: &str = "inputs";
    pub const STANZA: &str = "electricity_maps_carbon_intensity_latest://electricitymapslatest";
    pub const ACCOUNT: &str = "electricitymaps";
    pub const INTERVAL: &str = "3600";
    pub const INDEX: &str = "electricity_carbon_intensity";
    pub const API_BASE_URL: &str = "https://api.electricitymap.org/v3";

    pub fn settings(zones: &str) -> [(&'static str, &str); 4] {
        [
            ("electricity_maps_account", ACCOUNT),
            ("interval", INTERVAL),
            ("zone_s_", zones),
            ("index", INDEX),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spl_assets_cover_every_step() {
        let names: Vec<_> = spl_assets().collect();
        assert_eq!(names.len(), MACROS.len() + SAVED_SEARCHES.len());
        assert!(names.contains(&"power-otel"));
        assert!(names.contains(&"Summarize Electricity CO2e_kWh V1.0"));
        assert!(names.iter().all(|n| !n.contains('/')));
    }

    #[test]
    fn test_carbon_input_settings() {
        let settings = carbon_input::settings("DE,FR");
        assert!(settings.contains(&("zone_s_", "DE,FR")));
        assert!(settings.contains(&("interval", "3600")));
    }
}
