//! Environment variable tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::Scheme;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

use super::env_lock;

const ALL_VARS: [&str; 10] = [
    "SPLUNK_HOST",
    "SPLUNK_PORT",
    "SPLUNK_USERNAME",
    "SPLUNK_PASSWORD",
    "SPLUNK_SCHEME",
    "SPLUNK_SKIP_VERIFY",
    "SPLUNK_TIMEOUT",
    "SPLUNK_MAX_RETRIES",
    "SST_ASSETS_DIR",
    "SST_ZONES_URL",
];

/// Runs `f` with every quickstart variable unset except those in `set`.
fn with_env<R>(set: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = ALL_VARS
        .iter()
        .map(|name| {
            let value = set.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(vars, f)
}

#[test]
#[serial]
fn env_values_become_prompt_defaults() {
    let _lock = env_lock().lock().unwrap();
    with_env(
        &[
            ("SPLUNK_HOST", "splunk.example.com"),
            ("SPLUNK_PORT", "18089"),
            ("SPLUNK_USERNAME", "sst_admin"),
            ("SPLUNK_PASSWORD", "changeme"),
            ("SST_ASSETS_DIR", "/opt/toolkit"),
        ],
        || {
            let settings = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(settings.host.as_deref(), Some("splunk.example.com"));
            assert_eq!(settings.port, Some(18089));
            assert_eq!(settings.username.as_deref(), Some("sst_admin"));
            assert_eq!(
                settings.password.as_ref().map(|p| p.expose_secret().to_string()),
                Some("changeme".to_string())
            );
            assert_eq!(settings.assets.root(), PathBuf::from("/opt/toolkit"));
        },
    );
}

#[test]
#[serial]
fn transport_settings_from_env() {
    let _lock = env_lock().lock().unwrap();
    with_env(
        &[
            ("SPLUNK_SCHEME", "http"),
            ("SPLUNK_SKIP_VERIFY", "false"),
            ("SPLUNK_TIMEOUT", "90"),
            ("SPLUNK_MAX_RETRIES", "5"),
            ("SST_ZONES_URL", "http://127.0.0.1:9000/v3/zones"),
        ],
        || {
            let settings = ConfigLoader::new()
                .with_assets_dir(PathBuf::from("/tmp"))
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(settings.scheme, Scheme::Http);
            assert!(!settings.skip_verify);
            assert_eq!(settings.timeout, Duration::from_secs(90));
            assert_eq!(settings.max_retries, 5);
            assert_eq!(settings.zones_url, "http://127.0.0.1:9000/v3/zones");
        },
    );
}

#[test]
#[serial]
fn builder_values_after_from_env_take_precedence() {
    let _lock = env_lock().lock().unwrap();
    with_env(&[("SPLUNK_HOST", "from-env"), ("SPLUNK_PORT", "9089")], || {
        let settings = ConfigLoader::new()
            .with_assets_dir(PathBuf::from("/tmp"))
            .from_env()
            .unwrap()
            .with_host("from-cli".to_string())
            .build()
            .unwrap();
        assert_eq!(settings.host.as_deref(), Some("from-cli"));
        assert_eq!(settings.port, Some(9089));
    });
}

#[test]
#[serial]
fn empty_and_whitespace_vars_are_unset() {
    let _lock = env_lock().lock().unwrap();
    with_env(
        &[("SPLUNK_HOST", ""), ("SPLUNK_USERNAME", "   "), ("SPLUNK_PASSWORD", "\t")],
        || {
            let settings = ConfigLoader::new()
                .with_assets_dir(PathBuf::from("/tmp"))
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert!(settings.host.is_none());
            assert!(settings.username.is_none());
            assert!(settings.password.is_none());
        },
    );
}

#[test]
#[serial]
fn env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();
    temp_env::with_var("SST_TRIM_PROBE", Some("  value  "), || {
        assert_eq!(env_var_or_none("SST_TRIM_PROBE").as_deref(), Some("value"));
    });
    temp_env::with_var("SST_TRIM_PROBE", None::<&str>, || {
        assert!(env_var_or_none("SST_TRIM_PROBE").is_none());
    });
}

#[test]
#[serial]
fn non_numeric_port_is_rejected() {
    let _lock = env_lock().lock().unwrap();
    with_env(&[("SPLUNK_PORT", "eighty")], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "SPLUNK_PORT"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected InvalidValue"),
        }
    });
}

#[test]
#[serial]
fn unknown_scheme_is_rejected() {
    let _lock = env_lock().lock().unwrap();
    with_env(&[("SPLUNK_SCHEME", "ftp")], || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}
