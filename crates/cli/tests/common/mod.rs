//! Shared test utilities for otel-sst-quickstart integration tests.
//!
//! Invariants:
//! - Commands built here never read a local `.env` or host `SPLUNK_*`/`SST_*` values.

use assert_cmd::Command;

/// Returns a hermetic `otel-sst-quickstart` command.
pub fn quickstart_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("otel-sst-quickstart");
    cmd.env("DOTENV_DISABLED", "1");
    clear_env(&mut cmd);
    cmd
}

/// Remove every variable the loader reads.
pub fn clear_env(cmd: &mut Command) {
    for (key, _) in std::env::vars() {
        if key.starts_with("SPLUNK_") || key.starts_with("SST_") {
            cmd.env_remove(&key);
        }
    }
}
