//! Configuration constants.
//!
//! This module defines the service endpoints, timeouts, file names and display
//! strings used throughout the application when no override is configured.

use std::time::Duration;

// External services
/// Public-IP lookup endpoint (ipify, JSON flavour)
pub const PUBLIC_IP_URL: &str = "https://api.ipify.org?format=json";
/// Base URL of the ip-api.com compatible geolocation service
/// The free tier only answers plain HTTP.
pub const GEOIP_BASE_URL: &str = "http://ip-api.com";
/// Base URL of the Nominatim compatible reverse-geocoding service
pub const GEOCODE_BASE_URL: &str = "https://nominatim.openstreetmap.org";

// Network operation timeouts
/// Fixed timeout for the public-IP request
pub const PUBLIC_IP_TIMEOUT: Duration = Duration::from_secs(5);
/// Default per-request timeout in seconds for geolocation and geocoding
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Default User-Agent string for HTTP requests.
///
/// Nominatim's usage policy rejects requests without an identifying agent.
pub const DEFAULT_USER_AGENT: &str = concat!("geo_locator/", env!("CARGO_PKG_VERSION"));

/// Legal-use warning shown in the help text and before every lookup.
pub const LEGAL_NOTICE: &str = "Warning: locating people without their consent is illegal. \
Use this tool only for lawful and educational purposes.";

// Files
/// Default settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "geolocator_settings.json";
/// Map document name inside the report folder
pub const MAP_FILE_NAME: &str = "location_map.html";
/// Prefix of every report file name
pub const REPORT_FILE_PREFIX: &str = "geo_report";
/// Timestamp layout used in report file names (second resolution)
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Map rendering
/// Initial zoom level of the rendered map
pub const MAP_ZOOM: u8 = 12;
/// Environment variable holding the Mapbox access token
pub const MAPBOX_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";
/// Substituted into the Mapbox template when no token is configured
pub const MAPBOX_TOKEN_PLACEHOLDER: &str = "YOUR_MAPBOX_TOKEN";

// Wireless scanning
/// Interface queried by the wireless scanner. Not configurable.
pub const WIRELESS_INTERFACE: &str = "wlan0";

// Display strings
/// Placeholder used when the geocoder knows no address for the coordinates
pub const ADDRESS_UNAVAILABLE: &str = "Address details unavailable";
/// Shown in place of a missing ISP
pub const UNKNOWN_ISP: &str = "unknown";
/// Chart label for networks that do not broadcast an SSID
pub const HIDDEN_SSID_LABEL: &str = "hidden";
