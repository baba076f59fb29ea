//! Centralized constants for the quickstart workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication between the client and the CLI.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Host used when the operator leaves the host prompt empty.
pub const DEFAULT_HOST: &str = "localhost";

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Splunk Web port. Operators often type this instead of the management port.
pub const SPLUNK_WEB_PORT: u16 = 8000;

/// Username used when the operator leaves the username prompt empty.
pub const DEFAULT_USERNAME: &str = "admin";

/// App context of the first session, before any app-specific work.
pub const DEFAULT_APP: &str = "search";

/// Owner for every namespaced request; `nobody` makes objects app-shared.
pub const DEFAULT_OWNER: &str = "nobody";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for `max_retries` (backoff doubles per attempt).
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// External Services
// =============================================================================

/// Public zone listing of the Electricity Maps API.
pub const DEFAULT_ZONES_URL: &str = "https://api.electricitymap.org/v3/zones";

// =============================================================================
// Asset Layout
// =============================================================================

/// Directory (relative to the assets root) holding SPL definition files.
pub const SPL_DIR: [&str; 2] = ["splunk", "spl"];

/// Directory (relative to the assets root) holding sample data files.
pub const DATA_DIR: &str = "data";
