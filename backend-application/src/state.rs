use std::sync::Arc;

use backend_domain::ports::{CatalogueClient, RandomSource, SiteConfigRepository, SystemInfoProvider};
use backend_domain::RuntimeConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub catalogue: Arc<dyn CatalogueClient>,
    pub site_config_repo: Arc<dyn SiteConfigRepository>,
    pub system_info: Arc<dyn SystemInfoProvider>,
    pub random: Arc<dyn RandomSource>,
}
