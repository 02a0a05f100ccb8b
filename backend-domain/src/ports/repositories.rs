use async_trait::async_trait;

use crate::entities::{Item, SiteConfig};

/// Source of catalogue items. Implementations swallow every failure and
/// report it as an empty catalogue.
#[async_trait]
pub trait CatalogueClient: Send + Sync {
    async fn fetch_catalogue(&self) -> Vec<Item>;
}

#[async_trait]
pub trait SiteConfigRepository: Send + Sync {
    async fn load_site_config(&self) -> anyhow::Result<SiteConfig>;
}
