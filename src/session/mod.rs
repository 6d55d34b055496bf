//! Lookup session.
//!
//! A [`Session`] owns the settings, the service clients and the single
//! "current" lookup. Every user action is one method call that runs to
//! completion before returning; views learn about changes from the returned
//! values and from [`SessionEvent`]s.

mod events;
mod summary;

use std::path::PathBuf;

use chrono::Local;
use log::{error, info, warn};

use crate::config::{Config, MAP_FILE_NAME};
use crate::dns::{classify_target, resolve_target, HostResolver};
use crate::error_handling::{InitializationError, LookupError, SettingsError};
use crate::geocode::{describe_address, ReverseGeocoder};
use crate::geoip::{GeoIpClient, LocationRecord};
use crate::initialization::{init_client, init_resolver};
use crate::map::render_map;
use crate::public_ip::PublicIpClient;
use crate::report::write_report;
use crate::settings::Settings;
use crate::wifi::{
    select_scanner, signal_series, SignalBar, WifiNetwork, WirelessScanner, WIRELESS_UNAVAILABLE,
};

// Re-export public API
pub use events::{EventListener, SessionEvent, ViewState};
pub use summary::format_summary;

/// The current lookup result. At most one exists; the next success replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct LastLookup {
    /// Location returned by the geolocation service
    pub record: LocationRecord,
    /// IP the lookup resolved to (names reports)
    pub ip: String,
    /// Formatted summary (report contents)
    pub summary: String,
}

/// Everything a successful lookup produced.
#[derive(Debug)]
pub struct LookupOutcome {
    /// Location returned by the geolocation service
    pub record: LocationRecord,
    /// IP sent to the geolocation service
    pub resolved_ip: String,
    /// Address line (placeholder when reverse geocoding failed)
    pub address: String,
    /// Formatted summary
    pub summary: String,
    /// Automatic report result; `None` when automatic saving is off
    pub auto_report: Option<Result<PathBuf, LookupError>>,
}

/// Lookup session: settings, clients and the current result.
pub struct Session {
    config: Config,
    settings: Settings,
    public_ip: PublicIpClient,
    geoip: GeoIpClient,
    geocoder: ReverseGeocoder,
    resolver: Box<dyn HostResolver>,
    scanner: Box<dyn WirelessScanner>,
    last: Option<LastLookup>,
    listeners: Vec<EventListener>,
}

impl Session {
    /// Creates a session with the production resolver and platform scanner.
    ///
    /// Settings are loaded from `config.settings_file`. An unreadable or
    /// malformed file is logged and the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let settings = match Settings::load(&config.settings_file) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{e}; using default settings");
                Settings::default()
            }
        };
        let resolver = Box::new(init_resolver());
        Self::with_components(config, settings, resolver, select_scanner())
    }

    /// Creates a session from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn with_components(
        config: Config,
        settings: Settings,
        resolver: Box<dyn HostResolver>,
        scanner: Box<dyn WirelessScanner>,
    ) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self {
            public_ip: PublicIpClient::new(client.clone(), config.public_ip_url.clone()),
            geoip: GeoIpClient::new(client.clone(), config.geoip_base_url.clone()),
            geocoder: ReverseGeocoder::new(client, config.geocode_base_url.clone()),
            config,
            settings,
            resolver,
            scanner,
            last: None,
            listeners: Vec::new(),
        })
    }

    /// Registers a view callback for [`SessionEvent`]s.
    pub fn subscribe(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    fn emit(&self, event: SessionEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Changes the in-memory settings. Call [`Session::save_settings`] to persist.
    pub fn update_settings(&mut self, update: impl FnOnce(&mut Settings)) {
        update(&mut self.settings);
    }

    /// Persists the current settings to the configured settings file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` if the file cannot be written.
    pub fn save_settings(&self) -> Result<PathBuf, SettingsError> {
        let path = self.config.settings_file.clone();
        self.settings.save(&path)?;
        info!("Settings saved to {}", path.display());
        self.emit(SessionEvent::SettingsSaved(path.clone()));
        Ok(path)
    }

    /// The current lookup, if any.
    pub fn last_lookup(&self) -> Option<&LastLookup> {
        self.last.as_ref()
    }

    /// Which result actions are currently possible.
    pub fn view_state(&self) -> ViewState {
        ViewState::with_location(self.last.is_some())
    }

    /// Where the map document is written.
    pub fn map_output_path(&self) -> PathBuf {
        self.config
            .map_output
            .clone()
            .unwrap_or_else(|| self.settings.report_folder.join(MAP_FILE_NAME))
    }

    /// Locates `target`, an IPv4 literal or a domain name.
    ///
    /// On success the result becomes the current lookup and, if automatic
    /// saving is on, a report is written. A failed report does not fail the
    /// lookup; it is returned in [`LookupOutcome::auto_report`].
    ///
    /// # Errors
    ///
    /// Returns `EmptyInputError`, `ResolutionError` or `GeolocationError`.
    /// The current lookup is unchanged on error.
    pub async fn locate(&mut self, target: &str) -> Result<LookupOutcome, LookupError> {
        let target = target.trim();
        info!("Locating '{target}'");

        let (record, resolved_ip) = match self.resolve_and_locate(target).await {
            Ok(found) => found,
            Err(e) => {
                error!("Lookup for '{target}' failed: {e}");
                self.emit(SessionEvent::LookupFailed(e.to_string()));
                return Err(e);
            }
        };

        let address = describe_address(
            self.geocoder
                .reverse(record.latitude, record.longitude)
                .await
                .inspect_err(|reason| warn!("Reverse geocoding failed: {reason}")),
        );
        let summary = format_summary(&record, &address);

        self.last = Some(LastLookup {
            record: record.clone(),
            ip: resolved_ip.clone(),
            summary: summary.clone(),
        });
        info!(
            "Located {resolved_ip}: {}, {}, {}",
            record.city, record.region, record.country
        );
        self.emit(SessionEvent::LookupSucceeded(record.clone()));

        let auto_report = self.settings.save_reports.then(|| self.save_report());

        Ok(LookupOutcome {
            record,
            resolved_ip,
            address,
            summary,
            auto_report,
        })
    }

    async fn resolve_and_locate(
        &self,
        target: &str,
    ) -> Result<(LocationRecord, String), LookupError> {
        if target.is_empty() {
            return Err(LookupError::EmptyInputError);
        }
        let ip = resolve_target(&classify_target(target), self.resolver.as_ref()).await?;
        let record = self.geoip.lookup_ip(&ip).await?;
        Ok((record, ip))
    }

    /// Locates this machine's public IP.
    ///
    /// # Errors
    ///
    /// Returns `PublicIpError` if the address cannot be learned, otherwise
    /// whatever [`Session::locate`] returns.
    pub async fn locate_current(&mut self) -> Result<LookupOutcome, LookupError> {
        let ip = match self.public_ip.fetch().await {
            Ok(ip) => ip,
            Err(e) => {
                error!("{e}");
                self.emit(SessionEvent::LookupFailed(e.to_string()));
                return Err(e);
            }
        };
        self.locate(&ip).await
    }

    /// Saves the current summary as a report in the configured folder.
    ///
    /// # Errors
    ///
    /// Returns `NoLocationError` without a current lookup, or
    /// `ReportWriteError` if the file cannot be written.
    pub fn save_report(&self) -> Result<PathBuf, LookupError> {
        let last = self.last.as_ref().ok_or(LookupError::NoLocationError)?;
        match write_report(
            &self.settings.report_folder,
            &last.ip,
            &last.summary,
            Local::now(),
        ) {
            Ok(path) => {
                self.emit(SessionEvent::ReportSaved(path.clone()));
                Ok(path)
            }
            Err(e) => {
                warn!("{e}");
                self.emit(SessionEvent::ReportFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Writes the map document for the current lookup and returns its path.
    ///
    /// # Errors
    ///
    /// Returns `NoLocationError` without a current lookup, or
    /// `MapRenderError` if the document cannot be written.
    pub fn show_map(&self) -> Result<PathBuf, LookupError> {
        let last = self.last.as_ref().ok_or(LookupError::NoLocationError)?;
        let path = render_map(
            last.record.latitude,
            last.record.longitude,
            self.settings.map_provider,
            &self.map_output_path(),
        )?;
        self.emit(SessionEvent::MapRendered(path.clone()));
        Ok(path)
    }

    /// Map image export. Not available yet.
    ///
    /// The HTML map is still rendered, then the capability is reported as
    /// unavailable.
    ///
    /// # Errors
    ///
    /// Always returns an error: `NoLocationError`, `MapRenderError`, or
    /// `CapabilityUnavailableError`.
    pub fn export_map_image(&self) -> Result<PathBuf, LookupError> {
        self.show_map()?;
        Err(LookupError::CapabilityUnavailableError(
            "map image export is not available yet".to_string(),
        ))
    }

    /// Lists visible wireless networks.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityUnavailableError` on unsupported platforms without
    /// touching the scanner, or `ScanError` if the scan fails.
    pub fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, LookupError> {
        if !self.scanner.is_available() {
            return Err(LookupError::CapabilityUnavailableError(
                WIRELESS_UNAVAILABLE.to_string(),
            ));
        }
        let networks = self.scanner.scan()?;
        info!("Found {} wireless networks", networks.len());
        self.emit(SessionEvent::WifiScanned(networks.len()));
        Ok(networks)
    }

    /// Scans and returns the signal-strength chart series.
    ///
    /// An empty series means no networks are visible.
    ///
    /// # Errors
    ///
    /// Same as [`Session::scan_wifi`].
    pub fn analyze_signals(&self) -> Result<Vec<SignalBar>, LookupError> {
        let networks = self.scan_wifi()?;
        Ok(signal_series(&networks))
    }
}
