//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of a single user action.
///
/// Every variant carries a message fit for showing to the user. None of them
/// is fatal to the session; the next action starts fresh.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum LookupError {
    /// The target was empty after trimming.
    #[error("Please enter an IP address or domain name")]
    EmptyInputError,

    /// A domain name could not be resolved to an IPv4 address.
    #[error("Could not resolve '{target}': {reason}")]
    ResolutionError {
        /// The domain as entered
        target: String,
        /// Resolver failure description
        reason: String,
    },

    /// The geolocation service failed or returned nothing usable.
    #[error("Could not determine the location: {0}")]
    GeolocationError(String),

    /// The public-IP service failed.
    #[error("Could not get the public IP address: {0}")]
    PublicIpError(String),

    /// The map document could not be written.
    #[error("Could not create the map: {0}")]
    MapRenderError(String),

    /// The report file could not be written.
    #[error("Could not save the report to {path:?}: {reason}")]
    ReportWriteError {
        /// Report file that was being written
        path: PathBuf,
        /// I/O failure description
        reason: String,
    },

    /// The feature does not exist on this platform or in this build.
    #[error("Not available: {0}")]
    CapabilityUnavailableError(String),

    /// The wireless scanner is available but the scan failed.
    #[error("Wireless scan failed: {0}")]
    ScanError(String),

    /// A map or report action was requested before any successful lookup.
    #[error("No location available yet; run a lookup first")]
    NoLocationError,
}

/// Error types for the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the file failed.
    #[error("Settings file {path:?}: {source}")]
    Io {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file exists but is not a JSON object.
    #[error("Settings file {path:?} is malformed: {reason}")]
    Malformed {
        /// Settings file path
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// The settings could not be encoded.
    #[error("Settings serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}
