//! Signal analysis.

use super::types::{SignalBar, WifiNetwork};

/// Builds the horizontal bar-chart series for a scan.
///
/// One bar per network, in scan order. Hidden networks are labelled
/// `"hidden"`.
pub fn signal_series(networks: &[WifiNetwork]) -> Vec<SignalBar> {
    networks
        .iter()
        .map(|network| SignalBar {
            label: network.display_name().to_string(),
            value: network.signal,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(ssid: &str, signal: i32) -> WifiNetwork {
        WifiNetwork {
            ssid: ssid.to_string(),
            bssid: "aa:bb:cc:dd:ee:ff".to_string(),
            signal,
            channel: 6,
        }
    }

    #[test]
    fn test_series_preserves_order_and_values() {
        let series = signal_series(&[network("Cafe", -40), network("Home", -70)]);
        assert_eq!(
            series,
            vec![
                SignalBar {
                    label: "Cafe".to_string(),
                    value: -40
                },
                SignalBar {
                    label: "Home".to_string(),
                    value: -70
                },
            ]
        );
    }

    #[test]
    fn test_hidden_label() {
        let series = signal_series(&[network("", -55)]);
        assert_eq!(series[0].label, "hidden");
    }

    #[test]
    fn test_empty_scan() {
        assert!(signal_series(&[]).is_empty());
    }
}
