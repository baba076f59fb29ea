//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Layer command-line overrides on top of the environment-backed loader.
//!
//! Non-responsibilities:
//! - Does not prompt (see `interactive`); every connection value given here only
//!   becomes the default of its prompt.

use clap::Parser;
use sst_config::{ConfigLoader, Scheme};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "otel-sst-quickstart")]
#[command(
    about = "Configure the Sustainability Toolkit for Splunk to use OpenTelemetry data",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Environment:\n  SPLUNK_HOST, SPLUNK_PORT, SPLUNK_USERNAME, SPLUNK_PASSWORD, SPLUNK_SCHEME,\n  SPLUNK_SKIP_VERIFY, SPLUNK_TIMEOUT, SPLUNK_MAX_RETRIES, SST_ASSETS_DIR, SST_ZONES_URL\n  are read from the environment or a .env file (set DOTENV_DISABLED=1 to skip it).\n\nExamples:\n  otel-sst-quickstart\n  otel-sst-quickstart --host splunk.example.com --assets-dir ./sustainability-toolkit\n"
)]
pub struct Cli {
    /// Default answer for the Splunk host prompt
    #[arg(long)]
    pub host: Option<String>,

    /// Default answer for the management port prompt
    #[arg(long)]
    pub port: Option<u16>,

    /// Default answer for the username prompt
    #[arg(short, long)]
    pub username: Option<String>,

    /// Scheme of the management port (http or https)
    #[arg(long)]
    pub scheme: Option<Scheme>,

    /// Verify the management port's TLS certificate
    #[arg(long)]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Retries for 429/502/503/504 responses
    #[arg(long)]
    pub max_retries: Option<usize>,

    /// Toolkit checkout holding splunk/spl and data (defaults to the parent directory)
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Endpoint listing the Electricity Maps zones
    #[arg(long, value_name = "URL")]
    pub zones_url: Option<String>,

    /// Seconds to wait before asking to confirm a manual step
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub manual_pause: u64,

    /// Suppress progress bars
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Apply command-line values over whatever the loader already holds.
    pub fn apply(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(host) = &self.host {
            loader = loader.with_host(host.clone());
        }
        if let Some(port) = self.port {
            loader = loader.with_port(port);
        }
        if let Some(username) = &self.username {
            loader = loader.with_username(username.clone());
        }
        if let Some(scheme) = self.scheme {
            loader = loader.with_scheme(scheme);
        }
        if self.verify_tls {
            loader = loader.with_skip_verify(false);
        }
        if let Some(secs) = self.timeout {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = self.max_retries {
            loader = loader.with_max_retries(retries);
        }
        if let Some(dir) = &self.assets_dir {
            loader = loader.with_assets_dir(dir.clone());
        }
        if let Some(url) = &self.zones_url {
            loader = loader.with_zones_url(url.clone());
        }
        loader
    }

    pub fn manual_pause(&self) -> Duration {
        Duration::from_secs(self.manual_pause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_reach_settings() {
        let cli = Cli::parse_from([
            "otel-sst-quickstart",
            "--host",
            "splunk.example.com",
            "--scheme",
            "http",
            "--verify-tls",
            "--timeout",
            "12",
            "--max-retries",
            "0",
            "--assets-dir",
            "/opt/toolkit",
        ]);
        let settings = cli.apply(ConfigLoader::new()).build().unwrap();
        assert_eq!(settings.host.as_deref(), Some("splunk.example.com"));
        assert_eq!(settings.scheme, Scheme::Http);
        assert!(!settings.skip_verify);
        assert_eq!(settings.timeout, Duration::from_secs(12));
        assert_eq!(settings.max_retries, 0);
        assert_eq!(settings.assets.root(), std::path::Path::new("/opt/toolkit"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["otel-sst-quickstart", "--assets-dir", "/tmp"]);
        assert_eq!(cli.manual_pause(), Duration::from_secs(5));
        assert!(!cli.quiet);
        let settings = cli.apply(ConfigLoader::new()).build().unwrap();
        assert!(settings.skip_verify);
        assert_eq!(settings.scheme, Scheme::Https);
    }

    #[test]
    fn test_bad_scheme_is_rejected() {
        assert!(Cli::try_parse_from(["otel-sst-quickstart", "--scheme", "ftp"]).is_err());
    }
}
