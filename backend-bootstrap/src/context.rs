use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_infrastructure::{
    AppConfig, HostSystemInfo, HttpCatalogueClient, JsonSiteConfigRepository, TimeSeededRandom,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path).await?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config()?;
        info!(
            bind_addr = %runtime_config.bind_addr,
            service = %runtime_config.service_name,
            catalogue_api_url = %runtime_config.catalogue_api_url,
            catalogue_timeout_seconds = runtime_config.catalogue_timeout_seconds,
            site_config_path = %runtime_config.site_config_path,
            static_dir = %runtime_config.static_dir,
            "config loaded"
        );

        let catalogue = HttpCatalogueClient::new(
            runtime_config.catalogue_api_url.clone(),
            runtime_config.catalogue_timeout(),
        )?;
        let site_config_repo = JsonSiteConfigRepository::new(&runtime_config.site_config_path);

        let state = AppState {
            config: runtime_config,
            catalogue: Arc::new(catalogue),
            site_config_repo: Arc::new(site_config_repo),
            system_info: Arc::new(HostSystemInfo::detect()),
            random: Arc::new(TimeSeededRandom::new()),
        };

        Ok(Self { state })
    }
}
