//! Parser for `iw dev <iface> scan` output.
//!
//! The output consists of BSS stanzas, each starting with:
//! ```text
//! BSS aa:bb:cc:dd:ee:ff(on wlan0)
//! ```
//! followed by indented key-value lines.

use super::types::WifiNetwork;

/// Fields collected for one BSS stanza.
#[derive(Default)]
struct BssStanza {
    bssid: String,
    ssid: Option<String>,
    signal_dbm: Option<f64>,
    freq_mhz: Option<u32>,
    channel: Option<u32>,
}

impl BssStanza {
    fn finish(self) -> WifiNetwork {
        // Missing signal is reported as the noise floor
        let signal = self.signal_dbm.unwrap_or(-100.0).round() as i32;
        let channel = self
            .channel
            .or_else(|| self.freq_mhz.map(freq_to_channel))
            .unwrap_or(0);

        WifiNetwork {
            ssid: self.ssid.unwrap_or_default(),
            bssid: self.bssid,
            signal,
            channel,
        }
    }
}

/// Parses the text output of `iw dev <iface> scan`.
///
/// Stanzas whose header carries no well-formed MAC address are skipped.
pub fn parse_iw_scan_output(output: &str) -> Vec<WifiNetwork> {
    let mut results = Vec::new();
    let mut current: Option<BssStanza> = None;

    for line in output.lines() {
        if let Some(rest) = line.strip_prefix("BSS ") {
            if let Some(stanza) = current.take() {
                results.push(stanza.finish());
            }

            // "BSS aa:bb:cc:dd:ee:ff(on wlan0)" or "BSS aa:bb:cc:dd:ee:ff -- associated"
            let mac_end = rest
                .find(|c: char| !c.is_ascii_hexdigit() && c != ':')
                .unwrap_or(rest.len());
            let mac = &rest[..mac_end];
            if mac.len() == 17 {
                current = Some(BssStanza {
                    bssid: mac.to_lowercase(),
                    ..Default::default()
                });
            }
            continue;
        }

        let Some(stanza) = current.as_mut() else {
            continue;
        };
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("SSID:") {
            stanza.ssid = Some(rest.trim().to_owned());
        } else if let Some(rest) = trimmed.strip_prefix("signal:") {
            stanza.signal_dbm = parse_signal_dbm(rest);
        } else if let Some(rest) = trimmed.strip_prefix("freq:") {
            // "freq: 5180" or "freq: 2412.0"
            stanza.freq_mhz = rest
                .trim()
                .parse::<f64>()
                .ok()
                .map(|mhz| mhz.round() as u32);
        } else if let Some(rest) = trimmed.strip_prefix("DS Parameter set: channel") {
            stanza.channel = rest.trim().parse().ok();
        } else if let Some(rest) = trimmed.strip_prefix("* primary channel:") {
            stanza.channel = stanza.channel.or_else(|| rest.trim().parse().ok());
        }
    }

    if let Some(stanza) = current.take() {
        results.push(stanza.finish());
    }

    results
}

/// Converts a frequency in MHz to an 802.11 channel number.
fn freq_to_channel(freq_mhz: u32) -> u32 {
    match freq_mhz {
        // 2.4 GHz: channels 1-13
        2412..=2472 => (freq_mhz - 2407) / 5,
        2484 => 14,
        // 5 GHz
        5170..=5885 => (freq_mhz - 5000) / 5,
        // 6 GHz
        5955..=7115 => (freq_mhz - 5950) / 5,
        _ => 0,
    }
}

/// Parses "-52.00 dBm" into dBm.
fn parse_signal_dbm(s: &str) -> Option<f64> {
    s.split_whitespace().next()?.parse().ok()
}
