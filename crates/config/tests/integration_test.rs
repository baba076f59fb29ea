//! Integration tests for the public configuration surface.
//!
//! These tests go through the crate root only, the way the CLI and client
//! crates consume it.

use secrecy::{ExposeSecret, SecretString};
use sst_config::constants::{DEFAULT_SPLUNK_PORT, DEFAULT_ZONES_URL};
use sst_config::{ConfigError, ConfigLoader, ConnectionParams, Scheme};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Values given to the builder become prompt defaults and session settings.
#[test]
fn test_builder_chain_to_connection() {
    let settings = ConfigLoader::new()
        .with_host("https://splunk.example.com/".to_string())
        .with_port(18089)
        .with_username("operator".to_string())
        .with_password("s3cret".to_string())
        .with_scheme(Scheme::Http)
        .with_skip_verify(false)
        .with_timeout(Duration::from_secs(10))
        .with_max_retries(1)
        .with_assets_dir(PathBuf::from("/opt/toolkit"))
        .build()
        .expect("should build");

    assert_eq!(settings.zones_url, DEFAULT_ZONES_URL);
    assert_eq!(
        settings.assets.spl_path("power-otel"),
        Path::new("/opt/toolkit/splunk/spl/power-otel.txt")
    );

    let params = settings.connection(
        "splunk.example.com",
        DEFAULT_SPLUNK_PORT,
        "operator",
        SecretString::new("s3cret".to_string().into()),
    );
    assert_eq!(params.base_url(), "http://splunk.example.com:8089");
    assert!(!params.skip_verify);
    assert_eq!(params.timeout, Duration::from_secs(10));
    assert_eq!(params.max_retries, 1);
    assert_eq!(params.password.expose_secret(), "s3cret");
}

#[test]
fn test_app_context_switch_keeps_credentials() {
    let params = ConnectionParams::new(
        "10.0.0.5",
        8089,
        "admin",
        SecretString::new("pw".to_string().into()),
    );
    let scoped = params.with_app("Sustainability_Toolkit");

    assert_eq!(params.app, "search");
    assert_eq!(scoped.app, "Sustainability_Toolkit");
    assert_eq!(scoped.owner, params.owner);
    assert_eq!(scoped.base_url(), params.base_url());
    assert_eq!(scoped.password.expose_secret(), "pw");
    assert_eq!(
        scoped.web_url("/en-US/app/Sustainability_Toolkit"),
        "http(s)://10.0.0.5:8000/en-US/app/Sustainability_Toolkit"
    );
}

#[test]
fn test_invalid_values_are_config_errors() {
    let err = ConfigLoader::new()
        .with_assets_dir(PathBuf::from("."))
        .with_timeout(Duration::ZERO)
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));

    let err = ConfigLoader::new()
        .with_assets_dir(PathBuf::from("."))
        .with_zones_url("not a url".to_string())
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("not a url"));
}
