//! Platform wireless scanners.
//!
//! Which scanner is used is decided once by [`select_scanner`]; callers only
//! ask [`WirelessScanner::is_available`].

use crate::error_handling::LookupError;

use super::types::WifiNetwork;

/// Message used wherever the wireless capability is missing.
pub const WIRELESS_UNAVAILABLE: &str = "wireless scanning is only supported on Linux";

/// Capability interface for enumerating visible access points.
pub trait WirelessScanner: Send + Sync {
    /// Whether scanning can work on this platform.
    fn is_available(&self) -> bool;

    /// Enumerates visible access points.
    fn scan(&self) -> Result<Vec<WifiNetwork>, LookupError>;
}

/// Scanner for platforms without support. Never runs a platform command.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedScanner;

impl WirelessScanner for UnsupportedScanner {
    fn is_available(&self) -> bool {
        false
    }

    fn scan(&self) -> Result<Vec<WifiNetwork>, LookupError> {
        Err(LookupError::CapabilityUnavailableError(
            WIRELESS_UNAVAILABLE.to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
pub use linux::LinuxIwScanner;

#[cfg(target_os = "linux")]
mod linux {
    use std::process::Command;

    use log::debug;

    use super::{WifiNetwork, WirelessScanner};
    use crate::config::WIRELESS_INTERFACE;
    use crate::error_handling::LookupError;
    use crate::wifi::parse::parse_iw_scan_output;

    /// Scans by running `iw dev wlan0 scan`.
    ///
    /// A fresh scan normally needs `CAP_NET_ADMIN`; without it `iw` fails
    /// and the error text is passed on.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LinuxIwScanner;

    impl WirelessScanner for LinuxIwScanner {
        fn is_available(&self) -> bool {
            true
        }

        fn scan(&self) -> Result<Vec<WifiNetwork>, LookupError> {
            let args = ["dev", WIRELESS_INTERFACE, "scan"];
            debug!("Running iw {}", args.join(" "));

            let output = Command::new("iw").args(args).output().map_err(|e| {
                LookupError::ScanError(format!("failed to run `iw {}`: {e}", args.join(" ")))
            })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(LookupError::ScanError(format!(
                    "iw exited with {}: {}",
                    output.status,
                    stderr.trim()
                )));
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            let networks = parse_iw_scan_output(&stdout);
            debug!("iw reported {} access points", networks.len());
            Ok(networks)
        }
    }
}

/// Picks the scanner for the platform this binary was built for.
pub fn select_scanner() -> Box<dyn WirelessScanner> {
    #[cfg(target_os = "linux")]
    {
        Box::new(LinuxIwScanner)
    }
    #[cfg(not(target_os = "linux"))]
    {
        Box::new(UnsupportedScanner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_scanner_refuses() {
        let scanner = UnsupportedScanner;
        assert!(!scanner.is_available());
        match scanner.scan() {
            Err(LookupError::CapabilityUnavailableError(message)) => {
                assert_eq!(message, WIRELESS_UNAVAILABLE)
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_select_scanner_matches_platform() {
        let scanner = select_scanner();
        assert_eq!(scanner.is_available(), cfg!(target_os = "linux"));
    }
}
