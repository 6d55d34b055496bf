// Shared test helpers for session setup and mock services.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use geo_locator::dns::HostResolver;
use geo_locator::error_handling::LookupError;
use geo_locator::wifi::{WifiNetwork, WirelessScanner};
use geo_locator::{Config, LogFormat, LogLevel, Session, Settings};

/// Resolver answering from a fixed table; counts every call.
#[allow(dead_code)] // Used by other test files
pub struct CountingResolver {
    answers: HashMap<String, Ipv4Addr>,
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingResolver {
    pub fn new(entries: &[(&str, Ipv4Addr)]) -> Self {
        Self {
            answers: entries
                .iter()
                .map(|(host, ip)| (host.to_string(), *ip))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl HostResolver for CountingResolver {
    async fn resolve_ipv4(&self, host: &str) -> anyhow::Result<Ipv4Addr> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(host)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no A record for {host}"))
    }
}

/// Scanner with a fixed availability and result; counts scan calls.
#[allow(dead_code)]
pub struct FakeScanner {
    pub available: bool,
    pub networks: Vec<WifiNetwork>,
    pub scans: Arc<AtomicUsize>,
}

impl WirelessScanner for FakeScanner {
    fn is_available(&self) -> bool {
        self.available
    }

    fn scan(&self) -> Result<Vec<WifiNetwork>, LookupError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        Ok(self.networks.clone())
    }
}

/// Config pointing every service at `server` and every file into `dir`.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, dir: &TempDir) -> Config {
    Config {
        settings_file: dir.path().join("settings.json"),
        map_output: None,
        timeout_seconds: 5,
        user_agent: "geo_locator_test/1.0".to_string(),
        public_ip_url: format!("{}/ip", server.uri()),
        geoip_base_url: server.uri(),
        geocode_base_url: server.uri(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}

/// Settings writing reports into `dir/reports`.
#[allow(dead_code)]
pub fn test_settings(dir: &TempDir, save_reports: bool) -> Settings {
    Settings {
        save_reports,
        report_folder: dir.path().join("reports"),
        ..Settings::default()
    }
}

/// Session wired to the mock server, a counting resolver and a fake scanner.
#[allow(dead_code)]
pub fn create_test_session(
    server: &MockServer,
    dir: &TempDir,
    settings: Settings,
    resolver: CountingResolver,
    scanner: FakeScanner,
) -> Session {
    Session::with_components(
        test_config(server, dir),
        settings,
        Box::new(resolver),
        Box::new(scanner),
    )
    .expect("Failed to create test session")
}

/// Scanner that reports the capability as missing.
#[allow(dead_code)]
pub fn unavailable_scanner() -> (FakeScanner, Arc<AtomicUsize>) {
    let scans = Arc::new(AtomicUsize::new(0));
    let scanner = FakeScanner {
        available: false,
        networks: Vec::new(),
        scans: Arc::clone(&scans),
    };
    (scanner, scans)
}

/// Mounts a successful ip-api.com answer for `ip`.
#[allow(dead_code)]
pub async fn mount_geoip(server: &MockServer, ip: &str, country: &str, city: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/json/{ip}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "country": country,
            "regionName": "California",
            "city": city,
            "lat": 37.386,
            "lon": -122.0838,
            "timezone": "America/Los_Angeles",
            "isp": "Example ISP",
            "query": ip
        })))
        .mount(server)
        .await;
}

/// Mounts a Nominatim answer with `display_name`.
#[allow(dead_code)]
pub async fn mount_geocode(server: &MockServer, display_name: &str) {
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "display_name": display_name })),
        )
        .mount(server)
        .await;
}

/// Files currently in the report folder.
#[allow(dead_code)]
pub fn report_files(dir: &TempDir) -> Vec<PathBuf> {
    match std::fs::read_dir(dir.path().join("reports")) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
            .collect(),
        Err(_) => Vec::new(),
    }
}
