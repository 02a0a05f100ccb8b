use std::net::Ipv4Addr;
use std::path::PathBuf;

use pnet::datalink;
use pnet::ipnetwork::IpNetwork;
use sysinfo::System;

use backend_domain::ports::SystemInfoProvider;
use backend_domain::SystemInfo;

pub const CONTAINER_MARKERS: [&str; 2] = ["/.dockerenv", "/run/.containerenv"];

/// Reads host facts for the home page. Hostname, address and container
/// markers are probed per call. Orchestration is not detected; the flag is
/// whatever the constructor was given.
pub struct HostSystemInfo {
    container_markers: Vec<PathBuf>,
    is_orchestrated: bool,
}

impl HostSystemInfo {
    pub fn new(container_markers: Vec<PathBuf>, is_orchestrated: bool) -> Self {
        Self {
            container_markers,
            is_orchestrated,
        }
    }

    pub fn detect() -> Self {
        Self::new(CONTAINER_MARKERS.iter().map(PathBuf::from).collect(), false)
    }
}

impl SystemInfoProvider for HostSystemInfo {
    fn system_info(&self) -> SystemInfo {
        let interfaces = datalink::interfaces();
        let ip_address = first_non_loopback_ipv4(interfaces.iter().flat_map(|iface| iface.ips.iter()))
            .map(|ip| ip.to_string())
            .unwrap_or_default();
        SystemInfo {
            hostname: System::host_name().unwrap_or_default(),
            ip_address,
            is_container: any_marker_exists(&self.container_markers),
            is_orchestrated: self.is_orchestrated,
        }
    }
}

pub fn first_non_loopback_ipv4<'a>(ips: impl IntoIterator<Item = &'a IpNetwork>) -> Option<Ipv4Addr> {
    ips.into_iter().find_map(|network| match network {
        IpNetwork::V4(v4) if !v4.ip().is_loopback() => Some(v4.ip()),
        _ => None,
    })
}

fn any_marker_exists(markers: &[PathBuf]) -> bool {
    markers.iter().any(|marker| marker.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(value: &str) -> IpNetwork {
        value.parse().expect("ip network")
    }

    #[test]
    fn skips_loopback_and_ipv6_addresses() {
        let ips = vec![
            net("127.0.0.1/8"),
            net("::1/128"),
            net("fe80::1/64"),
            net("192.168.1.20/24"),
            net("10.0.0.4/8"),
        ];
        assert_eq!(
            first_non_loopback_ipv4(&ips),
            Some(Ipv4Addr::new(192, 168, 1, 20))
        );
    }

    #[test]
    fn no_usable_address_yields_none() {
        let ips = vec![net("127.0.0.1/8"), net("::1/128")];
        assert_eq!(first_non_loopback_ipv4(&ips), None);
    }

    #[test]
    fn container_flag_follows_marker_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let marker = dir.path().join(".dockerenv");

        let probe = HostSystemInfo::new(vec![marker.clone()], false);
        assert!(!probe.system_info().is_container);

        std::fs::write(&marker, "").expect("write marker");
        assert!(probe.system_info().is_container);
    }

    #[test]
    fn detected_host_is_never_reported_as_orchestrated() {
        std::env::set_var("KUBERNETES_SERVICE_HOST", "10.96.0.1");
        let info = HostSystemInfo::detect().system_info();
        std::env::remove_var("KUBERNETES_SERVICE_HOST");
        assert!(!info.is_orchestrated);
    }

    #[test]
    fn orchestrator_flag_is_reported_as_configured() {
        let probe = HostSystemInfo::new(Vec::new(), true);
        let info = probe.system_info();
        assert!(info.is_orchestrated);
        assert!(!info.is_container);
    }
}
