// Site-facing entities: page configuration, host facts, liveness payload

use serde::{Deserialize, Serialize};

/// Contents of the site configuration file, re-read on every home page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SystemInfo {
    pub hostname: String,
    /// First non-loopback IPv4 address, empty when none was found.
    pub ip_address: String,
    pub is_container: bool,
    pub is_orchestrated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}
