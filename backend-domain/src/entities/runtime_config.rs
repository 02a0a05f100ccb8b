use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub service_name: String,
    pub catalogue_api_url: String,
    pub catalogue_timeout_seconds: u64,
    pub site_config_path: String,
    pub static_dir: String,
    pub shutdown_grace_seconds: u64,
}

impl RuntimeConfig {
    pub fn catalogue_timeout(&self) -> Duration {
        Duration::from_secs(self.catalogue_timeout_seconds)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}
