//! Command-line options and subcommands.
//!
//! These types are generated by `clap` from the field attributes. Global
//! options map onto [`Config`]; subcommands map onto session actions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_USER_AGENT, GEOCODE_BASE_URL, GEOIP_BASE_URL, HTTP_TIMEOUT_SECS, LEGAL_NOTICE,
    PUBLIC_IP_URL, SETTINGS_FILE,
};
use crate::config::types::{Config, LogFormat, LogLevel};
use crate::settings::{MapProvider, PrivacyLevel, Settings};

/// Top-level command line.
///
/// # Examples
///
/// ```bash
/// # Locate a domain and write the map next to the reports
/// geo_locator locate example.com --map
///
/// # Locate this machine's public address and open the map
/// geo_locator whoami --map --open
///
/// # Switch the tile provider
/// geo_locator settings set --map-provider google
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "geo_locator",
    version,
    about = "Resolves an IP address or domain name to an approximate location.",
    after_help = LEGAL_NOTICE
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Settings file (JSON)
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    pub settings_file: PathBuf,

    /// Map document path (default: <report_folder>/location_map.html)
    #[arg(long, global = true)]
    pub map_output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Public-IP service endpoint
    #[arg(long, global = true, default_value = PUBLIC_IP_URL)]
    pub public_ip_url: String,

    /// Geolocation service base URL (ip-api.com compatible)
    #[arg(long, global = true, default_value = GEOIP_BASE_URL)]
    pub geoip_url: String,

    /// Reverse-geocoding service base URL (Nominatim compatible)
    #[arg(long, global = true, default_value = GEOCODE_BASE_URL)]
    pub geocode_url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Locate an IP address or domain name
    Locate {
        /// Dotted IPv4 address or domain name
        target: String,

        /// Follow-up actions on the result
        #[command(flatten)]
        actions: ResultActions,
    },

    /// Locate this machine's public IP address
    Whoami {
        /// Follow-up actions on the result
        #[command(flatten)]
        actions: ResultActions,
    },

    /// Nearby wireless networks (Linux only)
    Wifi {
        /// Wireless action
        #[command(subcommand)]
        command: WifiCommand,
    },

    /// Show or change the saved settings
    Settings {
        /// Settings action
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

/// Follow-up actions run on a successful lookup.
#[derive(Debug, Default, Clone, Args)]
pub struct ResultActions {
    /// Render the location on a map
    #[arg(long)]
    pub map: bool,

    /// Open the rendered map in the default browser (implies --map)
    #[arg(long)]
    pub open: bool,

    /// Save a report even when automatic saving is off
    #[arg(long)]
    pub report: bool,

    /// Export the map as an image (not available yet)
    #[arg(long)]
    pub export_image: bool,
}

/// Wireless subcommands.
#[derive(Debug, Subcommand)]
pub enum WifiCommand {
    /// List visible access points
    Scan,
    /// Chart the signal strength of visible access points
    Analyze,
}

/// Settings subcommands.
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the current settings
    Show,
    /// Change one or more settings and save them
    Set(SettingsUpdate),
}

/// Changes requested by `settings set`. Absent flags leave the value alone.
#[derive(Debug, Default, Clone, Args)]
pub struct SettingsUpdate {
    /// Privacy level: low|medium|high
    #[arg(long, value_enum)]
    pub privacy_level: Option<PrivacyLevel>,

    /// Map provider: openstreetmap|google|mapbox
    #[arg(long, value_enum)]
    pub map_provider: Option<MapProvider>,

    /// Save a report automatically after every lookup (true|false)
    #[arg(long, action = clap::ArgAction::Set)]
    pub save_reports: Option<bool>,

    /// Folder that receives reports and the default map document
    #[arg(long)]
    pub report_folder: Option<PathBuf>,
}

impl SettingsUpdate {
    /// Returns true when no flag was given.
    pub fn is_empty(&self) -> bool {
        self.privacy_level.is_none()
            && self.map_provider.is_none()
            && self.save_reports.is_none()
            && self.report_folder.is_none()
    }

    /// Applies the requested changes to `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(level) = self.privacy_level {
            settings.privacy_level = level;
        }
        if let Some(provider) = self.map_provider {
            settings.map_provider = provider;
        }
        if let Some(save) = self.save_reports {
            settings.save_reports = save;
        }
        if let Some(folder) = &self.report_folder {
            settings.report_folder = folder.clone();
        }
    }
}

impl Cli {
    /// Builds the library configuration from the global options.
    pub fn to_config(&self) -> Config {
        let g = &self.global;
        Config {
            settings_file: g.settings_file.clone(),
            map_output: g.map_output.clone(),
            timeout_seconds: g.timeout_seconds,
            user_agent: g.user_agent.clone(),
            public_ip_url: g.public_ip_url.clone(),
            geoip_base_url: g.geoip_url.clone(),
            geocode_base_url: g.geocode_url.clone(),
            log_level: g.log_level.clone(),
            log_format: g.log_format.clone(),
        }
    }
}
