//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failed runs.
//! - Map `ProvisionError`, `ClientError` and `ConfigError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `cancellation`).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use sst_client::{ClientError, ProvisionError};
use sst_config::ConfigError;

/// Structured exit codes for otel-sst-quickstart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every step completed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid credentials or expired session.
    AuthenticationFailed = 2,

    /// Connection error - refused, timed out, or a transient status that never cleared.
    ///
    /// Re-running the quickstart later is the recovery path.
    ConnectionError = 3,

    /// A resource the run depends on (macro, saved search) is missing.
    NotFound = 4,

    /// Invalid configuration or a request Splunk rejected as malformed.
    ValidationError = 5,

    /// Permission denied - insufficient privileges.
    PermissionDenied = 6,

    /// A required Splunk app is not installed.
    MissingDependencyApp = 7,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) | ClientError::SessionExpired { .. } => {
                ExitCode::AuthenticationFailed
            }
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            ClientError::InvalidUrl(_) | ClientError::MaxRetriesExceeded(_) => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::InvalidResponse(_) | ClientError::ApiError { status: 400, .. } => {
                ExitCode::ValidationError
            }

            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            ClientError::ApiError { .. } | ClientError::HttpError(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ProvisionError> for ExitCode {
    fn from(err: &ProvisionError) -> Self {
        match err {
            ProvisionError::Authentication { source, .. } => {
                if source.is_connection_error() || matches!(source, ClientError::InvalidUrl(_)) {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::AuthenticationFailed
                }
            }
            ProvisionError::NotFound { .. } => ExitCode::NotFound,
            ProvisionError::AlreadyExists { .. } => ExitCode::GeneralError,
            ProvisionError::RemoteApi { source, .. } => Self::from(source),
            ProvisionError::MissingDependencyApp { .. } => ExitCode::MissingDependencyApp,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ProvisionError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sst_client::ResourceKind;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://localhost:8089/servicesNS/nobody/Sustainability_Toolkit/data/indexes"
                .to_string(),
            message: "boom".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::MissingDependencyApp.as_i32(), 7);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_from_client_error_statuses() {
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
        assert_eq!(
            ExitCode::from(&ClientError::MaxRetriesExceeded(4)),
            ExitCode::ConnectionError
        );
    }

    #[test]
    fn test_from_provision_error() {
        let err = ProvisionError::Authentication {
            username: "admin".to_string(),
            base_url: "https://localhost:8089".to_string(),
            source: ClientError::AuthFailed("Login failed".to_string()),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);

        let err = ProvisionError::Authentication {
            username: "admin".to_string(),
            base_url: "https://localhost:8089".to_string(),
            source: ClientError::InvalidUrl("ftp://x".to_string()),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);

        let err = ProvisionError::NotFound {
            kind: ResourceKind::SavedSearch,
            name: "Summarize Asset CO2e & kW V1.0".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);

        let err = ProvisionError::MissingDependencyApp {
            app: "TA-electricity-carbon-intensity".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::MissingDependencyApp);
    }

    #[test]
    fn test_remote_api_uses_source_status() {
        let err = ProvisionError::RemoteApi {
            kind: ResourceKind::Index,
            name: "otel".to_string(),
            action: "create",
            source: api_error(403),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::PermissionDenied);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = anyhow::Error::new(ProvisionError::MissingDependencyApp {
            app: "Sustainability_Toolkit".to_string(),
        })
        .context("checking dependency apps");
        assert_eq!(err.exit_code(), ExitCode::MissingDependencyApp);

        let err = anyhow::Error::new(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::ValidationError);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
