//! Nearby wireless networks.
//!
//! Scanning is a platform capability behind [`WirelessScanner`]:
//! - `LinuxIwScanner`: parses `iw dev wlan0 scan` output (Linux)
//! - [`UnsupportedScanner`]: refuses every scan (all other platforms)
//!
//! The signal analyzer is a pure transform over a scan.

mod analysis;
mod parse;
mod scanner;
mod types;

// Re-export public API
pub use analysis::signal_series;
pub use parse::parse_iw_scan_output;
#[cfg(target_os = "linux")]
pub use scanner::LinuxIwScanner;
pub use scanner::{select_scanner, UnsupportedScanner, WirelessScanner, WIRELESS_UNAVAILABLE};
pub use types::{SignalBar, WifiNetwork};
