//! geo_locator library: IP and domain geolocation
//!
//! This library resolves a dotted IPv4 address or a domain name to an
//! approximate physical location, adds a best-effort street address, and
//! offers follow-up actions on the result: a tile map, a plain-text report,
//! and (on Linux) a scan of nearby wireless networks.
//!
//! # Example
//!
//! ```no_run
//! use geo_locator::{Config, Session};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(Config::default())?;
//!
//! let outcome = session.locate("example.com").await?;
//! println!("{}", outcome.summary);
//!
//! let map = session.show_map()?;
//! println!("Map written to {}", map.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and need a Tokio runtime. Each action is awaited to
//! completion before the next one starts.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod geocode;
pub mod geoip;
pub mod initialization;
pub mod map;
pub mod public_ip;
pub mod report;
pub mod session;
pub mod settings;
mod utils;
pub mod wifi;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError, SettingsError};
pub use geoip::LocationRecord;
pub use session::{LastLookup, LookupOutcome, Session, SessionEvent, ViewState};
pub use settings::{MapProvider, PrivacyLevel, Settings};
pub use wifi::{SignalBar, WifiNetwork};
