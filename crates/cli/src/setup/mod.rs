//! The quickstart sequence.
//!
//! Responsibilities:
//! - Read every SPL asset, then ask for the connection.
//! - Verify the dependency apps, create the indexes, optionally load sample data,
//!   configure the Electricity Maps input, then converge macros and saved searches.
//! - Record each step's outcome in a [`RunSummary`].
//!
//! Does NOT handle:
//! - Read-before-write decisions (see `sst_client::provision`).
//! - Exit codes (see `error`).
//!
//! Invariants:
//! - Calls are strictly sequential; a step starts only after the previous one returned.
//! - Every app-context switch opens a new session from a derived `ConnectionParams`.
//! - A missing SPL file fails the run before the first remote call.

pub mod plan;
mod summary;


use anyhow::{Context, Result};
use sst_client::provision::{
    self, RenameOutcome, check_app_installed, create_index, create_macro, edit_config,
    rename_macro, update_saved_search,
};
use sst_client::{ProvisionError, SavedSearchUpdate, SplunkClient};
use sst_config::{ConnectionParams, Settings};
use std::time::Duration;
use tracing::{info, warn};

use crate::assets::SplAssets;
use crate::interactive::{Prompter, prompt_connection};
use crate::sample_data::{DATASETS, SAMPLE_LOOKUP_MACROS, post_dataset};
use crate::zones::{fetch_zones, normalize_zones, render_zones};
use plan::{
    BACKUP_SUFFIX, CARBON_INTENSITY_APP, DEPENDENCY_APPS, INDEXES, MACROS, MacroStep,
    SAVED_SEARCHES, SUSTAINABILITY_APP, carbon_input,
};
pub use summary::{RunSummary, StepStatus};

pub const SAMPLE_DATA_PROMPT: &str = "If you do not have an active OpenTelemetry data pipeline yet, \
we can load example OpenTelemetry data from Cisco Intersight into a Splunk index for you. \
Do you want to load the example data?";
pub const LOOKUP_PAUSE_PROMPT: &str = "***ACTION REQUIRED***\nYou must edit the lookup files to \
match hostnames to site information. See the splunk/lookups folder for examples. The search macros \
cmdb-lookup-name and sites-lookup-name that reference these files have been changed for you. \
Press enter when complete";
pub const ACCOUNT_PAUSE_PROMPT: &str =
    "Once you complete this step return to this window and press enter to continue";
pub const KNOWN_ZONES_PROMPT: &str = "Do you already know the names of your Electricity Maps zones? \
If not, answer no and we will list the options";
pub const ZONES_PROMPT: &str = "Enter the Electricity Maps zones to collect data from, comma \
separated (e.g. CH,DE,PL,US-CAR-DUK,US-CAL-LDWP)";

/// Run-time knobs that are not connection settings.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Wait before asking to confirm a manual step.
    pub manual_pause: Duration,
    pub show_progress: bool,
}

/// Run the whole sequence.
///
/// # Errors
///
/// Stops at the first failed step. Re-running after fixing the cause converges,
/// since every step is idempotent.
pub async fn run(
    prompter: &mut dyn Prompter,
    settings: &Settings,
    opts: &RunOptions,
) -> Result<RunSummary> {
    let spl = SplAssets::load(&settings.assets, plan::spl_assets()).await?;
    info!(files = spl.len(), root = %settings.assets.root().display(), "SPL assets loaded");

    let params = prompt_connection(prompter, settings)?;
    let mut summary = RunSummary::default();

    let mut client = open_session(&params).await?;
    for app in DEPENDENCY_APPS {
        check_dependency_app(&mut client, &params, app).await?;
        summary.record(format!("app {app}"), StepStatus::AlreadyPresent);
    }

    let sst = params.with_app(SUSTAINABILITY_APP);
    let mut client = open_session(&sst).await?;
    for (name, kind) in INDEXES {
        let outcome = create_index(&mut client, name, kind).await?;
        summary.record(format!("index {name}"), outcome);
    }

    if prompter.confirm(SAMPLE_DATA_PROMPT)? {
        load_sample_data(prompter, &params, settings, opts, &mut summary).await?;
    } else {
        summary.record("sample data", StepStatus::Skipped);
    }

    println!("Switching to the carbon intensity app context.");
    let carbon = params.with_app(CARBON_INTENSITY_APP);
    let mut client = open_session(&carbon).await?;
    configure_carbon_input(prompter, &mut client, &carbon, settings, opts, &mut summary).await?;

    println!("Switching back to the Sustainability Toolkit app context.");
    let mut client = open_session(&sst).await?;
    for step in MACROS {
        let definition = spl.get(step.name())?;
        match step {
            MacroStep::Create(name) => {
                let outcome = create_macro(&mut client, name, definition).await?;
                summary.record(format!("macro {name}"), outcome);
            }
            MacroStep::Replace(name) => {
                replace_macro(&mut client, name, definition, &mut summary).await?;
            }
        }
    }

    for step in SAVED_SEARCHES {
        let mut update = SavedSearchUpdate::schedule(step.cron).with_search(spl.get(step.spl)?);
        if let Some(description) = step.description {
            update = update.with_description(description);
        }
        let outcome = update_saved_search(&mut client, step.name, &update).await?;
        println!("Saved search '{}' is scheduled at '{}'.", step.name, step.cron);
        summary.record(format!("saved search {}", step.name), &outcome);
    }

    Ok(summary)
}

async fn open_session(params: &ConnectionParams) -> Result<SplunkClient> {
    let client = provision::connect(params).await.with_context(|| {
        format!(
            "Could not authenticate to Splunk in app context '{}'. Please check the input and retry",
            params.app
        )
    })?;
    println!("Authenticated to Splunk ({}).", params.app);
    Ok(client)
}

async fn check_dependency_app(
    client: &mut SplunkClient,
    params: &ConnectionParams,
    app: &str,
) -> Result<()> {
    match check_app_installed(client, app).await {
        Ok(_) => {
            println!("App '{app}' is installed.");
            Ok(())
        }
        Err(e @ ProvisionError::MissingDependencyApp { .. }) => {
            println!(
                "App '{app}' is not installed. Install it from {}\n\
                 Rerun this quickstart once both {} are installed.",
                params.web_url(
                    "en-US/manager/search/appsremote?offset=0&count=20&order=relevance&query=sustainability"
                ),
                DEPENDENCY_APPS.join(" and ")
            );
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Back `name` up as `<name>-old`, then converge it to `definition`.
///
/// A missing original stops the run; nothing is overwritten without a backup.
async fn replace_macro(
    client: &mut SplunkClient,
    name: &str,
    definition: &str,
    summary: &mut RunSummary,
) -> Result<()> {
    let backup = format!("{name}{BACKUP_SUFFIX}");
    let outcome = rename_macro(client, name, &backup).await?;
    if outcome == RenameOutcome::Copied {
        println!("Search macro {name} was backed up as {backup}.");
    }
    summary.record(format!("macro {backup}"), outcome);

    let outcome = create_macro(client, name, definition).await?;
    println!("Search macro {name} is up to date.");
    summary.record(format!("macro {name}"), outcome);
    Ok(())
}

async fn load_sample_data(
    prompter: &mut dyn Prompter,
    params: &ConnectionParams,
    settings: &Settings,
    opts: &RunOptions,
    summary: &mut RunSummary,
) -> Result<()> {
    let mut client = None;
    for dataset in &DATASETS {
        let scoped = params.with_app(dataset.app);
        let mut session = open_session(&scoped).await?;
        let path = settings.assets.data_path(dataset.file);
        let report = post_dataset(&mut session, &path, dataset, opts.show_progress).await?;
        println!(
            "Wrote {} of {} sample events from {} to {}.",
            report.posted,
            report.total,
            path.display(),
            dataset.index
        );
        let status = if report.failed == 0 {
            StepStatus::Created
        } else {
            StepStatus::Attention(format!("{} of {} lines failed", report.failed, report.total))
        };
        summary.record(format!("sample data {}", dataset.file), status);
        client = Some(session);
    }

    let Some(mut client) = client else {
        return Ok(());
    };
    for (name, lookup) in SAMPLE_LOOKUP_MACROS {
        replace_macro(&mut client, name, lookup, summary).await?;
    }

    tokio::time::sleep(opts.manual_pause).await;
    prompter.pause(LOOKUP_PAUSE_PROMPT)?;
    Ok(())
}

async fn configure_carbon_input(
    prompter: &mut dyn Prompter,
    client: &mut SplunkClient,
    params: &ConnectionParams,
    settings: &Settings,
    opts: &RunOptions,
    summary: &mut RunSummary,
) -> Result<()> {
    println!(
        "\n***ACTION REQUIRED***\nPlease navigate to this URL, click Add, and provision your \
         Electricity Maps API account, then return here:\n{}\n\nUse the following information:\n \
         Electricity Maps Account name: {}\n Base Product URL: {}\n API Key: [your API key]",
        params.web_url(&format!("en-US/app/{CARBON_INTENSITY_APP}/configuration")),
        carbon_input::ACCOUNT,
        carbon_input::API_BASE_URL,
    );
    tokio::time::sleep(opts.manual_pause).await;
    prompter.pause(ACCOUNT_PAUSE_PROMPT)?;

    if !prompter.confirm(KNOWN_ZONES_PROMPT)? {
        match fetch_zones(&settings.zones_url, settings.timeout).await {
            Ok(zones) => println!("{}", render_zones(&zones)),
            Err(e) => {
                let detail = format!("{e:#}");
                warn!(error = %detail, "Zones lookup failed");
                println!("Could not list the zones ({detail}).");
            }
        }
    }

    let zones = loop {
        let answer = prompter.input(ZONES_PROMPT, None)?;
        match normalize_zones(&answer) {
            Some(zones) => break zones,
            None => println!("Enter at least one zone code."),
        }
    };

    let outcome = edit_config(
        client,
        carbon_input::CONF,
        carbon_input::STANZA,
        &carbon_input::settings(&zones),
    )
    .await?;
    println!("Electricity Maps input collects zones {zones} every {}s.", carbon_input::INTERVAL);
    summary.record(format!("input {}", carbon_input::STANZA), &outcome);
    Ok(())
}
