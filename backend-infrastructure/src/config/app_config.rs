use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

use crate::config::validate_catalogue_url;
use crate::utils::resolve_path;

pub const CONFIG_PATH_ENV: &str = "RECOMMENDATION_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CATALOGUE_API_URL: &str = "http://localhost:5000/api/products";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    pub service_name: String,
    pub catalogue_api_url: String,
    pub catalogue_timeout_seconds: u64,
    pub site_config_path: String,
    pub static_dir: String,
    pub shutdown_grace_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            service_name: "recommendation".to_string(),
            catalogue_api_url: DEFAULT_CATALOGUE_API_URL.to_string(),
            catalogue_timeout_seconds: 10,
            site_config_path: "./config.json".to_string(),
            static_dir: "./static".to_string(),
            shutdown_grace_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Loads the optional TOML file, then applies environment overrides.
    ///
    /// The file path comes from `explicit_path`, then `RECOMMENDATION_CONFIG`,
    /// then `./config.toml`. A missing file is not an error.
    pub async fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut config = Self::parse(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            config.resolve_paths(path.parent());
            config
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            AppConfig::default()
        };
        config.apply_env_overrides(|key| env::var(key).ok());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn normalize(&mut self) {
        self.bind_host = self.bind_host.trim().to_string();
        self.service_name = self.service_name.trim().to_string();
        self.catalogue_api_url = self.catalogue_api_url.trim().to_string();
        self.site_config_path = self.site_config_path.trim().to_string();
        self.static_dir = self.static_dir.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.site_config_path = resolve_path(base, &self.site_config_path);
        self.static_dir = resolve_path(base, &self.static_dir);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        validate_catalogue_url(&self.catalogue_api_url)?;
        if self.service_name.is_empty() {
            return Err(anyhow!("service_name must not be empty"));
        }
        if self.catalogue_timeout_seconds == 0 {
            return Err(anyhow!("catalogue_timeout_seconds must be greater than 0"));
        }
        if self.shutdown_grace_seconds == 0 {
            return Err(anyhow!("shutdown_grace_seconds must be greater than 0"));
        }
        if self.site_config_path.is_empty() {
            return Err(anyhow!("site_config_path must not be empty"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self
            .bind_host
            .parse()
            .map_err(|err| anyhow!("invalid bind_host '{}': {}", self.bind_host, err))?;
        Ok(SocketAddr::new(host, self.port))
    }

    pub fn to_runtime_config(&self) -> Result<RuntimeConfig> {
        Ok(RuntimeConfig {
            bind_addr: self.bind_addr()?.to_string(),
            service_name: self.service_name.clone(),
            catalogue_api_url: self.catalogue_api_url.clone(),
            catalogue_timeout_seconds: self.catalogue_timeout_seconds,
            site_config_path: self.site_config_path.clone(),
            static_dir: self.static_dir.clone(),
            shutdown_grace_seconds: self.shutdown_grace_seconds,
        })
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get("PORT") {
            self.port = parse_or_keep("PORT", &value, self.port);
        }
        if let Some(value) = get("CATALOGUE_API_URL") {
            self.catalogue_api_url = value;
        }
        if let Some(value) = get("RECOMMENDATION_BIND_HOST") {
            self.bind_host = value;
        }
        if let Some(value) = get("RECOMMENDATION_SERVICE_NAME") {
            self.service_name = value;
        }
        if let Some(value) = get("RECOMMENDATION_CATALOGUE_TIMEOUT_SECONDS") {
            self.catalogue_timeout_seconds = parse_or_keep(
                "RECOMMENDATION_CATALOGUE_TIMEOUT_SECONDS",
                &value,
                self.catalogue_timeout_seconds,
            );
        }
        if let Some(value) = get("RECOMMENDATION_SITE_CONFIG_PATH") {
            self.site_config_path = value;
        }
        if let Some(value) = get("RECOMMENDATION_STATIC_DIR") {
            self.static_dir = value;
        }
        if let Some(value) = get("RECOMMENDATION_SHUTDOWN_GRACE_SECONDS") {
            self.shutdown_grace_seconds = parse_or_keep(
                "RECOMMENDATION_SHUTDOWN_GRACE_SECONDS",
                &value,
                self.shutdown_grace_seconds,
            );
        }
    }
}

fn parse_or_keep<T>(key: &str, value: &str, current: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("ignoring unparseable {}='{}', keeping {}", key, value, current);
            current
        }
    }
}
