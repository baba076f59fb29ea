//! Best-effort loading of the sample OTel and Electricity Maps exports.
//!
//! Every non-empty line is posted once as a raw event. A failed line is logged
//! and counted; it is never retried.

use anyhow::{Context, Result};
use sst_client::{RawEventMeta, SplunkClient};
use std::path::Path;
use tracing::{info, warn};

use crate::progress::{LoadProgress, crossed_boundary};
use crate::setup::plan::{CARBON_INTENSITY_APP, SUSTAINABILITY_APP};

/// A line-delimited JSON export under `<assets>/data/`.
#[derive(Debug, Clone, Copy)]
pub struct SampleDataset {
    pub file: &'static str,
    /// App context the events are posted from.
    pub app: &'static str,
    pub index: &'static str,
    pub sourcetype: &'static str,
    pub source: &'static str,
}

impl SampleDataset {
    pub fn meta(&self) -> RawEventMeta<'static> {
        RawEventMeta {
            source: self.source,
            sourcetype: self.sourcetype,
            index: self.index,
        }
    }
}

pub const DATASETS: [SampleDataset; 2] = [
    SampleDataset {
        file: "emaps-export.jsonl",
        app: CARBON_INTENSITY_APP,
        index: "electricity_carbon_intensity",
        sourcetype: "EM:carbonintensity",
        source: "electricity_maps_carbon_intensity_latest",
    },
    SampleDataset {
        file: "otelcol-export.jsonl",
        app: SUSTAINABILITY_APP,
        index: "otel",
        sourcetype: "_json",
        source: "otelcol-export.json",
    },
];

/// Lookup macros pointed at the sample lookup files after loading.
pub const SAMPLE_LOOKUP_MACROS: [(&str, &str); 2] = [
    ("cmdb-lookup-name", "otel_sample_cmdb.csv"),
    ("sites-lookup-name", "otel_sample_sites.csv"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub total: usize,
    pub posted: usize,
    pub failed: usize,
}

/// Post every non-empty line of `path` with the dataset's metadata.
///
/// # Errors
///
/// Only an unreadable file is an error; failed posts are counted in the report.
pub async fn post_dataset(
    client: &mut SplunkClient,
    path: &Path,
    dataset: &SampleDataset,
    show_progress: bool,
) -> Result<LoadReport> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read sample data {}", path.display()))?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let total = lines.len();
    let progress = LoadProgress::new(show_progress, dataset.index);
    let mut report = LoadReport {
        total,
        posted: 0,
        failed: 0,
    };
    let mut last_reported = 0;

    for (i, line) in lines.iter().enumerate() {
        match client.post_raw_event(line, dataset.meta()).await {
            Ok(()) => report.posted += 1,
            Err(e) => {
                warn!(
                    file = dataset.file,
                    line = i + 1,
                    error = %e,
                    "Failed to post sample event"
                );
                report.failed += 1;
            }
        }

        if let Some(percent) = crossed_boundary(i as u64 + 1, total as u64, last_reported) {
            progress.set_percent(percent);
            last_reported = percent;
        }
    }
    progress.finish();

    info!(
        file = dataset.file,
        index = dataset.index,
        posted = report.posted,
        failed = report.failed,
        "Sample data loaded"
    );
    Ok(report)
}
