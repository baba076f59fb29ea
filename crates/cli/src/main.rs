//! otel-sst-quickstart - configure the Sustainability Toolkit for OpenTelemetry data.
//!
//! Responsibilities:
//! - Load `.env`, parse arguments, and initialize logging.
//! - Run the interactive setup sequence and print its summary.
//! - Translate failures into structured exit codes.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Read-before-write decisions (see `sst_client::provision`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE reading the environment so `.env` values count.
//! - Logs go to stderr; prompts and progress messages go to stdout.

mod args;
mod assets;
mod cancellation;
mod error;
mod interactive;
mod progress;
mod sample_data;
mod setup;
mod zones;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use interactive::TerminalPrompter;
use setup::{RunOptions, RunSummary};
use sst_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli, loader).await {
        Ok(summary) => {
            println!("\n{summary}");
            if summary.needs_attention() {
                println!("Some steps need attention; see the summary above.");
            }
            println!("Sustainability Toolkit quickstart completed.");
            std::process::exit(ExitCode::Success.as_i32());
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(e.exit_code().as_i32());
        }
    }
}

async fn run(cli: Cli, loader: ConfigLoader) -> Result<RunSummary> {
    let settings = cli.apply(loader.from_env()?).build()?;
    tracing::debug!(?settings, "Settings resolved");

    cancellation::install_interrupt_handler();

    let opts = RunOptions {
        manual_pause: cli.manual_pause(),
        show_progress: !cli.quiet,
    };
    setup::run(&mut TerminalPrompter, &settings, &opts).await
}
