use chrono::{SecondsFormat, Utc};

use crate::AppState;
use backend_domain::ServiceStatus;

pub const OPERATIONAL: &str = "operational";

/// Static liveness report; no dependency is probed.
pub fn service_status(state: &AppState) -> ServiceStatus {
    ServiceStatus {
        status: OPERATIONAL.to_string(),
        service: state.config.service_name.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
