use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;

use backend_domain::{SiteConfig, SiteConfigRepository};

/// Reads the site configuration JSON on every call; nothing is cached.
pub struct JsonSiteConfigRepository {
    path: PathBuf,
}

impl JsonSiteConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SiteConfigRepository for JsonSiteConfigRepository {
    async fn load_site_config(&self) -> anyhow::Result<SiteConfig> {
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(config)
    }
}
