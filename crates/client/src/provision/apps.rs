use tracing::{error, info};

use super::{ProvisionError, ResourceKind};
use crate::client::SplunkClient;
use crate::models::App;

/// Exact-name lookup among the installed apps.
///
/// # Errors
///
/// [`ProvisionError::MissingDependencyApp`] when no app has that name.
pub async fn check_app_installed(
    client: &mut SplunkClient,
    app_name: &str,
) -> Result<App, ProvisionError> {
    let apps = client
        .list_apps()
        .await
        .map_err(ProvisionError::remote(ResourceKind::App, app_name, "list"))?;

    match apps.into_iter().find(|app| app.name == app_name) {
        Some(app) => {
            info!(app = app_name, version = ?app.version, "Required app is installed");
            Ok(app)
        }
        None => {
            error!(app = app_name, "Required app is not installed");
            Err(ProvisionError::MissingDependencyApp {
                app: app_name.to_string(),
            })
        }
    }
}
