use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::AppState;
use backend_domain::ports::{CatalogueClient, RandomSource, SiteConfigRepository, SystemInfoProvider};
use backend_domain::{Item, RuntimeConfig, SiteConfig, SystemInfo};

pub struct StaticCatalogue(pub Vec<Item>);

#[async_trait]
impl CatalogueClient for StaticCatalogue {
    async fn fetch_catalogue(&self) -> Vec<Item> {
        self.0.clone()
    }
}

pub struct FixedSiteConfig;

#[async_trait]
impl SiteConfigRepository for FixedSiteConfig {
    async fn load_site_config(&self) -> anyhow::Result<SiteConfig> {
        Ok(SiteConfig {
            version: "1.2.3".to_string(),
        })
    }
}

pub struct MissingSiteConfig;

#[async_trait]
impl SiteConfigRepository for MissingSiteConfig {
    async fn load_site_config(&self) -> anyhow::Result<SiteConfig> {
        Err(anyhow!("config.json not found"))
    }
}

pub struct FixedSystemInfo;

impl SystemInfoProvider for FixedSystemInfo {
    fn system_info(&self) -> SystemInfo {
        SystemInfo {
            hostname: "test-host".to_string(),
            ip_address: "10.0.0.5".to_string(),
            is_container: false,
            is_orchestrated: false,
        }
    }
}

pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn next_index(&self, _len: usize) -> usize {
        self.0
    }
}

pub fn item(id: i64, name: &str) -> Item {
    Item {
        id,
        name: name.to_string(),
        ..Item::default()
    }
}

pub fn state_with(items: Vec<Item>, random: impl RandomSource + 'static) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            service_name: "recommendation".to_string(),
            catalogue_api_url: "http://localhost:5000/api/products".to_string(),
            catalogue_timeout_seconds: 10,
            site_config_path: "./config.json".to_string(),
            static_dir: "./static".to_string(),
            shutdown_grace_seconds: 30,
        },
        catalogue: Arc::new(StaticCatalogue(items)),
        site_config_repo: Arc::new(FixedSiteConfig),
        system_info: Arc::new(FixedSystemInfo),
        random: Arc::new(random),
    }
}
