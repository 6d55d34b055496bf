//! Configuration types.
//!
//! This module defines the logging enums and the library `Config` struct. The
//! command-line surface that fills a `Config` lives in [`super::cli`].

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_USER_AGENT, GEOCODE_BASE_URL, GEOIP_BASE_URL, HTTP_TIMEOUT_SECS, PUBLIC_IP_URL,
    SETTINGS_FILE,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Holds everything a [`crate::Session`] needs that is not a user setting:
/// where the settings live, where the map goes, and which services to call.
///
/// # Examples
///
/// ```no_run
/// use geo_locator::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     settings_file: PathBuf::from("my_settings.json"),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings file (flat JSON document)
    pub settings_file: PathBuf,

    /// Map document path; defaults to `<report_folder>/location_map.html`
    pub map_output: Option<PathBuf>,

    /// Per-request timeout in seconds for geolocation and geocoding
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Public-IP service endpoint
    pub public_ip_url: String,

    /// Geolocation service base URL
    pub geoip_base_url: String,

    /// Reverse-geocoding service base URL
    pub geocode_base_url: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_file: PathBuf::from(SETTINGS_FILE),
            map_output: None,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            public_ip_url: PUBLIC_IP_URL.to_string(),
            geoip_base_url: GEOIP_BASE_URL.to_string(),
            geocode_base_url: GEOCODE_BASE_URL.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
