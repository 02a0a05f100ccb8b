use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::error;

use crate::AppError;
use crate::AppState;
use backend_domain::SystemInfo;

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub version: String,
    pub year: i32,
    pub system_info: SystemInfo,
}

pub async fn home_page(state: &AppState) -> Result<HomePage, AppError> {
    let site = state.site_config_repo.load_site_config().await.map_err(|err| {
        error!(
            path = %state.config.site_config_path,
            "failed to load site config: {:#}",
            err
        );
        AppError::Internal(err)
    })?;
    Ok(HomePage {
        version: site.version,
        year: Utc::now().year(),
        system_info: state.system_info.system_info(),
    })
}
