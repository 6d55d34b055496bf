//! Wireless data structures.

use serde::Serialize;

use crate::config::HIDDEN_SSID_LABEL;

/// One visible access point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiNetwork {
    /// Network name; empty when the access point hides it
    pub ssid: String,
    /// Hardware address, lowercase `aa:bb:cc:dd:ee:ff`
    pub bssid: String,
    /// Signal strength in dBm
    pub signal: i32,
    /// 802.11 channel, 0 when unknown
    pub channel: u32,
}

impl WifiNetwork {
    /// The SSID, or `"hidden"` when the network does not broadcast one.
    pub fn display_name(&self) -> &str {
        if self.ssid.is_empty() {
            HIDDEN_SSID_LABEL
        } else {
            &self.ssid
        }
    }
}

/// One bar of the signal-strength chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalBar {
    /// Network name or `"hidden"`
    pub label: String,
    /// Signal strength in dBm
    pub value: i32,
}
